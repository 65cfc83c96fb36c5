//! Spatial data structures
//!
//! This module contains the grid representation:
//! - Padded cell grid with per-cell search state
//! - Terrain classes and traversal costs

/// Padded grid, cells and cell flags
pub mod grid;
/// Terrain classification and costs
pub mod terrain;

pub use grid::{Cell, CellFlags, Flag, Grid, Relaxation};
pub use terrain::Terrain;
