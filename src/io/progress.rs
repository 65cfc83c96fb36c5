//! Spinner reporting how far a non-animated search has expanded

use std::sync::LazyLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::algorithm::events::{SearchEvent, SearchObserver};
use crate::io::configuration::PROGRESS_TICK_MS;
use crate::io::error::Result;
use crate::spatial::grid::Grid;

static SEARCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{spinner} [{elapsed_precise}] [{bar:30.cyan/blue}] {pos}/{len} cells {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Counts finalized cells against the number of passable cells
pub struct SearchProgress {
    bar: ProgressBar,
    frontier: usize,
}

impl SearchProgress {
    /// Progress display drawn to standard error
    pub fn new(grid: &Grid) -> Self {
        let bar = ProgressBar::new(grid.passable_count() as u64);
        bar.set_style(SEARCH_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
        Self { bar, frontier: 0 }
    }

    /// Progress tracker that draws nothing
    pub fn hidden(grid: &Grid) -> Self {
        let bar = ProgressBar::with_draw_target(
            Some(grid.passable_count() as u64),
            ProgressDrawTarget::hidden(),
        );
        Self { bar, frontier: 0 }
    }

    /// Cells finalized so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Cells currently waiting in the queue
    pub const fn frontier(&self) -> usize {
        self.frontier
    }

    /// Clear the display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl SearchObserver for SearchProgress {
    fn on_event(&mut self, _grid: &Grid, event: SearchEvent) -> Result<()> {
        match event {
            SearchEvent::Enqueued { .. } => {
                self.frontier += 1;
            }
            SearchEvent::Finalized { distance, .. } => {
                self.frontier = self.frontier.saturating_sub(1);
                self.bar.inc(1);
                self.bar.set_message(format!("(distance {distance})"));
            }
            SearchEvent::Improved { .. }
            | SearchEvent::Examined { .. }
            | SearchEvent::PathMarked { .. } => {}
        }
        Ok(())
    }
}
