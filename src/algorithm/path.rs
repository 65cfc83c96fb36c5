//! Path reconstruction from predecessor links

use log::debug;

use crate::algorithm::events::{SearchEvent, SearchObserver};
use crate::io::error::{Result, SearchError};
use crate::spatial::grid::{Flag, Grid};

/// Lowest-cost route found by a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    /// Cell indices from start to goal, both included
    pub cells: Vec<usize>,
    /// Sum of traversal costs of every cell after the start
    pub cost: u32,
}

impl Path {
    /// Number of cells on the path, start and goal included
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// Test if the path holds no cells
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Positions `(x, y)` of the path cells in travel order
    pub fn positions(&self, grid: &Grid) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .filter_map(|&index| grid.position(index))
            .collect()
    }
}

/// Walk predecessor links from `goal` back to `start`
///
/// Each predecessor gets its successor link pointed forward, and every cell
/// strictly between start and goal is flagged [`Flag::OnPath`]. Running it
/// again on the same grid yields the same links and cost.
///
/// # Errors
///
/// Returns `BrokenPath` if a link is missing, points outside the grid, or
/// the chain is longer than the grid has cells
pub fn reconstruct<O: SearchObserver>(
    grid: &mut Grid,
    start: usize,
    goal: usize,
    observer: &mut O,
) -> Result<Path> {
    let limit = grid.len();
    let mut cells = vec![goal];
    let mut cost: u32 = 0;
    let mut current = goal;

    while current != start {
        if cells.len() > limit {
            return Err(SearchError::BrokenPath { cell: current });
        }

        let cell = grid
            .cell(current)
            .ok_or(SearchError::BrokenPath { cell: current })?;
        cost = cost.saturating_add(cell.cost().unwrap_or(0));
        let previous = cell
            .predecessor
            .ok_or(SearchError::BrokenPath { cell: current })?;

        let previous_cell = grid
            .cell_mut(previous)
            .ok_or(SearchError::BrokenPath { cell: previous })?;
        previous_cell.successor = Some(current);
        if previous != start {
            previous_cell.flags.insert(Flag::OnPath);
            observer.on_event(grid, SearchEvent::PathMarked { cell: previous })?;
        }

        cells.push(previous);
        current = previous;
    }

    cells.reverse();
    debug!("reconstructed path of {} cells, cost {cost}", cells.len());

    Ok(Path { cells, cost })
}
