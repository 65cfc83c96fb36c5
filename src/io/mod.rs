/// Animated terminal rendering of a running search
pub mod animation;
/// Command-line parsing and run orchestration
pub mod cli;
/// Terrain costs, glyphs and runtime defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// Terrain map loading and coordinate validation
pub mod loader;
/// Progress display for long searches
pub mod progress;
/// Static text rendering and cell appearance rules
pub mod render;
/// GIF recording of search runs
pub mod visualization;
