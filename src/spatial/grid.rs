//! Padded terrain grid and per-cell search state
//!
//! Cells live in a row-major 2-D array surrounded by a one-cell impassable
//! border, so every interior cell has four in-bounds orthogonal neighbors
//! reachable through flat index arithmetic. Cell indices (`y * width + x`)
//! are the payloads carried by the priority queue.

use bitvec::array::BitArray;
use bitvec::order::Lsb0;
use ndarray::Array2;

use crate::io::configuration::{MAX_GRID_DIMENSION, WALL_GLYPH};
use crate::io::error::{Result, invalid_map};
use crate::spatial::terrain::Terrain;

/// Role a cell has taken on during a search run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// Shortest distance is final
    Visited,
    /// Enqueued with a tentative distance
    Frontier,
    /// Search origin
    Start,
    /// Search target
    Goal,
    /// Lies strictly between start and goal on the reconstructed path
    OnPath,
}

impl Flag {
    const fn bit(self) -> usize {
        self as usize
    }
}

/// Compact set of [`Flag`]s
#[derive(Clone, Copy, Debug)]
pub struct CellFlags {
    bits: BitArray<[u8; 1], Lsb0>,
}

impl CellFlags {
    /// Set with no flags present
    pub const fn empty() -> Self {
        Self {
            bits: BitArray::ZERO,
        }
    }

    /// Add a flag
    pub fn insert(&mut self, flag: Flag) {
        self.bits.set(flag.bit(), true);
    }

    /// Remove a flag
    pub fn remove(&mut self, flag: Flag) {
        self.bits.set(flag.bit(), false);
    }

    /// Test flag membership
    pub fn contains(&self, flag: Flag) -> bool {
        self.bits.get(flag.bit()).as_deref() == Some(&true)
    }

    /// Test if no flags are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Remove every flag
    pub fn clear(&mut self) {
        self.bits = BitArray::ZERO;
    }
}

impl Default for CellFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for CellFlags {
    fn eq(&self, other: &Self) -> bool {
        self.bits.as_raw_slice() == other.bits.as_raw_slice()
    }
}

impl Eq for CellFlags {}

/// Result of offering a cell a route through a neighbor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relaxation {
    /// Finalized, impassable, or already reached at least as cheaply
    Unchanged,
    /// First route to a cell the search had not seen
    Discovered,
    /// Cheaper route to a cell already on the frontier
    Improved,
}

/// One grid square
#[derive(Debug, Clone)]
pub struct Cell {
    /// Terrain class, which fixes the traversal cost
    pub terrain: Terrain,
    /// Map glyph the cell was loaded from
    pub glyph: char,
    /// Search roles
    pub flags: CellFlags,
    /// Best known distance from the start; meaningful once enqueued
    pub distance: u32,
    /// Cell the best known path arrives from
    pub predecessor: Option<usize>,
    /// Next cell along the reconstructed path
    pub successor: Option<usize>,
}

impl Cell {
    /// Create a cell from a map glyph
    pub const fn new(glyph: char) -> Self {
        Self {
            terrain: Terrain::from_glyph(glyph),
            glyph,
            flags: CellFlags::empty(),
            distance: 0,
            predecessor: None,
            successor: None,
        }
    }

    /// Traversal cost of entering this cell, `None` if impassable
    pub const fn cost(&self) -> Option<u32> {
        self.terrain.cost()
    }

    /// Whether the cell can be entered
    pub const fn is_passable(&self) -> bool {
        self.terrain.is_passable()
    }

    /// Offer a route arriving from `from`, which sits at `from_distance`
    ///
    /// On `Discovered` or `Improved` the cell's distance and predecessor now
    /// describe the new route and the caller owes it a queue entry.
    pub fn offer(&mut self, from: usize, from_distance: u32) -> Relaxation {
        if self.flags.contains(Flag::Visited) {
            return Relaxation::Unchanged;
        }
        let Some(cost) = self.cost() else {
            return Relaxation::Unchanged;
        };

        let candidate = from_distance.saturating_add(cost);
        let outcome = if self.flags.contains(Flag::Frontier) {
            if candidate >= self.distance {
                return Relaxation::Unchanged;
            }
            Relaxation::Improved
        } else {
            self.flags.insert(Flag::Frontier);
            Relaxation::Discovered
        };
        self.distance = candidate;
        self.predecessor = Some(from);
        outcome
    }

    /// Whether a queue entry with this priority was superseded by a cheaper one
    pub const fn is_stale(&self, priority: u32) -> bool {
        priority > self.distance
    }

    /// Forget everything a previous search recorded on this cell
    pub fn reset_search_state(&mut self) {
        self.flags.clear();
        self.distance = 0;
        self.predecessor = None;
        self.successor = None;
    }
}

/// Terrain grid bordered by impassable cells
#[derive(Debug, Clone)]
pub struct Grid {
    /// Cells indexed by (`row`, `col`)
    cells: Array2<Cell>,
}

impl Grid {
    /// Create a grid of the given padded size where every cell is a wall
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::from_elem((height, width), Cell::new(WALL_GLYPH)),
        }
    }

    /// Build a padded grid from terrain rows
    ///
    /// The result measures `(longest row + 2) x (row count + 2)`; short rows
    /// are filled with walls on the right.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, no terrain at all, or either
    /// interior dimension exceeds `MAX_GRID_DIMENSION`
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let interior_height = rows.len();
        let interior_width = rows
            .iter()
            .map(|row| row.as_ref().chars().count())
            .max()
            .unwrap_or(0);

        if interior_height == 0 || interior_width == 0 {
            return Err(invalid_map(&"map contains no terrain"));
        }
        if interior_height > MAX_GRID_DIMENSION || interior_width > MAX_GRID_DIMENSION {
            return Err(invalid_map(&format!(
                "map is {interior_width}x{interior_height}, limit is {MAX_GRID_DIMENSION} per side"
            )));
        }

        let mut grid = Self::new(interior_width + 2, interior_height + 2);
        for (y, row) in rows.iter().enumerate() {
            for (x, glyph) in row.as_ref().chars().enumerate() {
                if let Some(cell) = grid.cells.get_mut((y + 1, x + 1)) {
                    *cell = Cell::new(glyph);
                }
            }
        }

        Ok(grid)
    }

    /// Build a padded grid from newline-separated terrain text
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Grid::from_rows`]
    pub fn from_text(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text.lines().collect();
        Self::from_rows(&rows)
    }

    /// Padded width, border included
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Padded height, border included
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Total number of cells, border included
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells at all
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flat index of a position
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width() + x
    }

    /// Position `(x, y)` of a flat index, `None` if out of range
    pub fn position(&self, index: usize) -> Option<(usize, usize)> {
        let width = self.width();
        (index < self.len()).then(|| (index % width, index / width))
    }

    /// Whether a position lies inside the border
    pub fn is_interior(&self, x: usize, y: usize) -> bool {
        x >= 1
            && y >= 1
            && x < self.width().saturating_sub(1)
            && y < self.height().saturating_sub(1)
    }

    /// Cell at a flat index
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        let (x, y) = self.position(index)?;
        self.cells.get((y, x))
    }

    /// Mutable cell at a flat index
    pub fn cell_mut(&mut self, index: usize) -> Option<&mut Cell> {
        let (x, y) = self.position(index)?;
        self.cells.get_mut((y, x))
    }

    /// Cell at a position
    pub fn cell_at(&self, x: usize, y: usize) -> Option<&Cell> {
        self.cells.get((y, x))
    }

    /// Orthogonal neighbors of a cell in up, down, left, right order
    ///
    /// Relies on the border: an interior cell always yields four indices,
    /// and border cells never need their neighbors expanded.
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + use<> {
        let width = self.width();
        let len = self.len();
        let down = index + width;
        let right = index + 1;
        [
            index.checked_sub(width),
            (down < len).then_some(down),
            index.checked_sub(1),
            (right < len).then_some(right),
        ]
        .into_iter()
        .flatten()
    }

    /// Number of cells that can be entered
    pub fn passable_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_passable()).count()
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Clear flags, distances and links left by a previous search
    pub fn reset_search_state(&mut self) {
        for cell in &mut self.cells {
            cell.reset_search_state();
        }
    }
}
