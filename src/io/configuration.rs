//! Terrain costs, display glyphs and runtime defaults

// Terrain traversal costs keyed by map glyph
/// Cost of entering open ground (`.`)
pub const PLAIN_COST: u32 = 1;
/// Cost of entering rough ground (`:`)
pub const ROUGH_COST: u32 = 2;
/// Cost of entering dense ground (`=`)
pub const DENSE_COST: u32 = 5;
/// Cost of entering steep ground (`+`)
pub const STEEP_COST: u32 = 12;

/// Glyph used for the impassable border and unknown terrain
pub const WALL_GLYPH: char = '#';
/// Glyph drawn on the start cell
pub const START_GLYPH: char = 'A';
/// Glyph drawn on the goal cell
pub const GOAL_GLYPH: char = 'B';
/// Glyph drawn on path and frontier cells
pub const PATH_GLYPH: char = 'o';

// Safety limit to prevent excessive memory allocation
/// Maximum allowed interior map dimension
pub const MAX_GRID_DIMENSION: usize = 4096;

/// Priority queue slots reserved before the first insertion
pub const QUEUE_PREALLOC_ENTRIES: usize = 4096;

/// Animation interval that disables animated drawing (microseconds)
pub const DEFAULT_INTERVAL_US: u64 = 0;

// Output settings
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 20;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Side length in pixels of one cell in exported frames
pub const GIF_CELL_SCALE: u32 = 4;
/// Upper bound on frames kept in an exported animation
pub const GIF_MAX_FRAMES: usize = 600;

// Progress display settings
/// Spinner redraw period in milliseconds
pub const PROGRESS_TICK_MS: u64 = 100;
