//! Terrain map loading and coordinate validation

use std::path::Path;

use log::debug;

use crate::io::error::{Result, SearchError};
use crate::spatial::grid::Grid;

/// Read a terrain map file into a padded grid
///
/// Each character is one square; lines may differ in length.
///
/// # Errors
///
/// Returns `MapLoad` if the file cannot be read and `InvalidMap` if it
/// holds no terrain or is too large
pub fn load_map(path: &Path) -> Result<Grid> {
    let text = std::fs::read_to_string(path).map_err(|source| SearchError::MapLoad {
        path: path.to_path_buf(),
        source,
    })?;

    let grid = Grid::from_text(&text)?;
    debug!(
        "loaded '{}' as {}x{} padded grid, {} passable cells",
        path.display(),
        grid.width(),
        grid.height(),
        grid.passable_count()
    );
    Ok(grid)
}

/// Flat index of an interior position
///
/// # Errors
///
/// Returns `CoordinatesOutOfRange` when the position lies on the border or
/// outside the grid
pub fn interior_index(grid: &Grid, x: usize, y: usize) -> Result<usize> {
    let out_of_range = || SearchError::CoordinatesOutOfRange {
        x,
        y,
        width: grid.width(),
        height: grid.height(),
    };

    if !grid.is_interior(x, y) {
        return Err(out_of_range());
    }
    y.checked_mul(grid.width())
        .and_then(|row| row.checked_add(x))
        .ok_or_else(out_of_range)
}
