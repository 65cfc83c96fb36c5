//! Uniform-cost pathfinding over weighted terrain grids
//!
//! A fixed-capacity binary min-heap drives a Dijkstra-style search across a
//! grid padded with impassable cells. Terrain maps are loaded from text, and
//! results are shown as a static report, an animated terminal view, or a GIF.

#![forbid(unsafe_code)]

/// Priority queue, search engine and path reconstruction
pub mod algorithm;
/// Map loading, rendering, command line and error handling
pub mod io;
/// Padded terrain grid and terrain classes
pub mod spatial;

pub use algorithm::heap::{HeapEntry, PriorityQueue};
pub use algorithm::search::{SearchConfig, SearchOutcome, find_path};
pub use io::error::{Result, SearchError};
pub use spatial::grid::Grid;
