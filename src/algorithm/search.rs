//! Uniform-cost search over a padded terrain grid
//!
//! Cells move from unseen to frontier to finalized and never back. A frontier
//! cell that is reached more cheaply gets its distance and predecessor
//! updated and a fresh queue entry; the entry it already had goes stale and
//! is dropped when popped, recognisable by a priority above the cell's
//! recorded distance. Both rules live on [`Cell::offer`] and [`Cell::is_stale`].
//!
//! Costs are charged on entering a cell, so every route into a cell pays the
//! same final step and the first neighbor to be finalized already offers the
//! cheapest route. On grids the improvement branch therefore never fires and
//! no entry goes stale.
//!
//! [`Cell::offer`]: crate::spatial::grid::Cell::offer
//! [`Cell::is_stale`]: crate::spatial::grid::Cell::is_stale

use log::{debug, info, trace};

use crate::algorithm::events::{SearchEvent, SearchObserver};
use crate::algorithm::heap::PriorityQueue;
use crate::algorithm::path::{Path, reconstruct};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::{Flag, Grid, Relaxation};

/// Per-run search settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Queue capacity; the grid's cell count when unset
    pub capacity: Option<usize>,
}

/// Counters collected during a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells whose distance became final
    pub finalized: usize,
    /// Successful queue insertions, start included
    pub enqueued: usize,
    /// Popped entries discarded because the cell had improved since
    pub stale: usize,
    /// Largest queue size observed
    pub peak_queue: usize,
}

/// Result of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Goal was extracted from the queue
    Found {
        /// Reconstructed route
        path: Path,
        /// Run counters
        stats: SearchStats,
    },
    /// Queue emptied before the goal was reached
    NoPath {
        /// Run counters
        stats: SearchStats,
    },
}

impl SearchOutcome {
    /// Path if one was found
    pub const fn path(&self) -> Option<&Path> {
        match self {
            Self::Found { path, .. } => Some(path),
            Self::NoPath { .. } => None,
        }
    }

    /// Run counters
    pub const fn stats(&self) -> &SearchStats {
        match self {
            Self::Found { stats, .. } | Self::NoPath { stats } => stats,
        }
    }
}

/// Single-use search engine owning the frontier for one run
pub struct UniformCostSearch<'g, O> {
    grid: &'g mut Grid,
    queue: PriorityQueue<u32>,
    observer: O,
    stats: SearchStats,
}

impl<'g, O: SearchObserver> UniformCostSearch<'g, O> {
    /// Prepare a run over `grid`, reporting transitions to `observer`
    pub fn new(grid: &'g mut Grid, config: SearchConfig, observer: O) -> Self {
        let capacity = config.capacity.unwrap_or_else(|| grid.len());
        Self {
            grid,
            queue: PriorityQueue::new(capacity),
            observer,
            stats: SearchStats::default(),
        }
    }

    /// Search from `start` to `goal`, both flat cell indices
    ///
    /// Any state left on the grid by an earlier run is cleared first. On
    /// success the path is reconstructed and marked on the grid.
    ///
    /// # Errors
    ///
    /// Returns an error if start or goal is not an interior cell, if the
    /// queue runs out of capacity, or if the observer fails
    pub fn run(mut self, start: usize, goal: usize) -> Result<SearchOutcome> {
        self.check_interior("start", start)?;
        self.check_interior("goal", goal)?;
        self.grid.reset_search_state();

        if let Some(cell) = self.grid.cell_mut(goal) {
            cell.flags.insert(Flag::Goal);
        }
        if let Some(cell) = self.grid.cell_mut(start) {
            cell.flags.insert(Flag::Start);
            cell.flags.insert(Flag::Visited);
            cell.distance = 0;
            cell.predecessor = None;
        }
        self.push(start, 0)?;
        self.observer.on_event(
            self.grid,
            SearchEvent::Enqueued {
                cell: start,
                distance: 0,
            },
        )?;

        debug!(
            "searching {start} -> {goal} on {}x{} grid, queue capacity {}",
            self.grid.width(),
            self.grid.height(),
            self.queue.capacity()
        );

        let mut found = false;
        while let Some(entry) = self.queue.dequeue_min() {
            let current = entry.payload;
            let Some(cell) = self.grid.cell_mut(current) else {
                continue;
            };
            if cell.is_stale(entry.priority) {
                self.stats.stale += 1;
                continue;
            }
            cell.flags.remove(Flag::Frontier);
            let distance = cell.distance;

            if current == goal {
                found = true;
                break;
            }

            cell.flags.insert(Flag::Visited);
            self.stats.finalized += 1;
            trace!("finalized {current} at distance {distance}");
            self.observer.on_event(
                self.grid,
                SearchEvent::Finalized {
                    cell: current,
                    distance,
                },
            )?;

            for neighbor in self.grid.neighbors(current) {
                self.relax(current, distance, neighbor)?;
                self.observer.on_event(
                    self.grid,
                    SearchEvent::Examined {
                        from: current,
                        to: neighbor,
                    },
                )?;
            }
        }

        let stats = self.stats;
        if !found {
            info!(
                "no path from {start} to {goal} after finalizing {} cells",
                stats.finalized
            );
            return Ok(SearchOutcome::NoPath { stats });
        }

        let path = reconstruct(self.grid, start, goal, &mut self.observer)?;
        info!(
            "found path of {} cells with cost {} ({} finalized, peak queue {})",
            path.len(),
            path.cost,
            stats.finalized,
            stats.peak_queue
        );
        Ok(SearchOutcome::Found { path, stats })
    }

    /// Offer `neighbor` a route through `from`
    fn relax(&mut self, from: usize, from_distance: u32, neighbor: usize) -> Result<()> {
        let Some(cell) = self.grid.cell_mut(neighbor) else {
            return Ok(());
        };
        let relaxation = cell.offer(from, from_distance);
        let distance = cell.distance;
        let event = match relaxation {
            Relaxation::Unchanged => return Ok(()),
            Relaxation::Discovered => SearchEvent::Enqueued {
                cell: neighbor,
                distance,
            },
            Relaxation::Improved => SearchEvent::Improved {
                cell: neighbor,
                distance,
            },
        };

        self.push(neighbor, distance)?;
        self.observer.on_event(self.grid, event)
    }

    fn push(&mut self, cell: usize, distance: u32) -> Result<()> {
        self.queue.enqueue(cell, distance)?;
        self.stats.enqueued += 1;
        self.stats.peak_queue = self.stats.peak_queue.max(self.queue.size());
        Ok(())
    }

    fn check_interior(&self, parameter: &'static str, index: usize) -> Result<()> {
        match self.grid.position(index) {
            Some((x, y)) if self.grid.is_interior(x, y) => Ok(()),
            _ => Err(invalid_parameter(
                parameter,
                &index,
                &"not an interior cell of the grid",
            )),
        }
    }
}

/// Run a uniform-cost search with the given settings and observer
///
/// # Errors
///
/// Returns an error under the same conditions as [`UniformCostSearch::run`]
pub fn find_path<O: SearchObserver>(
    grid: &mut Grid,
    start: usize,
    goal: usize,
    config: SearchConfig,
    observer: O,
) -> Result<SearchOutcome> {
    UniformCostSearch::new(grid, config, observer).run(start, goal)
}
