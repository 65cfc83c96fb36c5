//! State transitions exposed to renderers while a search runs

use crate::io::error::Result;
use crate::spatial::grid::Grid;

/// Observable step of a search run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEvent {
    /// Cell entered the frontier for the first time
    Enqueued {
        /// Cell index
        cell: usize,
        /// Tentative distance
        distance: u32,
    },
    /// Frontier cell received a strictly shorter tentative distance
    Improved {
        /// Cell index
        cell: usize,
        /// New tentative distance
        distance: u32,
    },
    /// Cell's distance became final
    Finalized {
        /// Cell index
        cell: usize,
        /// Final distance
        distance: u32,
    },
    /// A neighbor of an expanded cell was checked, whether or not it changed
    Examined {
        /// Expanded cell
        from: usize,
        /// Neighbor that was checked
        to: usize,
    },
    /// Cell was marked during path reconstruction
    PathMarked {
        /// Cell index
        cell: usize,
    },
}

impl SearchEvent {
    /// Cell whose appearance may have changed
    pub const fn cell(&self) -> usize {
        match *self {
            Self::Enqueued { cell, .. }
            | Self::Improved { cell, .. }
            | Self::Finalized { cell, .. }
            | Self::PathMarked { cell } => cell,
            Self::Examined { to, .. } => to,
        }
    }
}

/// Receives search events together with a read-only view of the grid
pub trait SearchObserver {
    /// Called after the grid has been updated for `event`
    ///
    /// # Errors
    ///
    /// Returns an error if the observer's output fails; the search stops
    /// and propagates it
    fn on_event(&mut self, grid: &Grid, event: SearchEvent) -> Result<()>;
}

impl SearchObserver for () {
    fn on_event(&mut self, _grid: &Grid, _event: SearchEvent) -> Result<()> {
        Ok(())
    }
}

impl<T: SearchObserver + ?Sized> SearchObserver for &mut T {
    fn on_event(&mut self, grid: &Grid, event: SearchEvent) -> Result<()> {
        (**self).on_event(grid, event)
    }
}

impl<T: SearchObserver> SearchObserver for Option<T> {
    fn on_event(&mut self, grid: &Grid, event: SearchEvent) -> Result<()> {
        match self {
            Some(observer) => observer.on_event(grid, event),
            None => Ok(()),
        }
    }
}

impl<A: SearchObserver, B: SearchObserver> SearchObserver for (A, B) {
    fn on_event(&mut self, grid: &Grid, event: SearchEvent) -> Result<()> {
        self.0.on_event(grid, event)?;
        self.1.on_event(grid, event)
    }
}

/// Observer that keeps every event, useful for inspecting a run
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    /// Events in the order they happened
    pub events: Vec<SearchEvent>,
}

impl SearchObserver for EventLog {
    fn on_event(&mut self, _grid: &Grid, event: SearchEvent) -> Result<()> {
        self.events.push(event);
        Ok(())
    }
}
