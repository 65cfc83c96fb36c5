//! Command-line interface and run orchestration

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use crate::algorithm::search::{SearchConfig, SearchOutcome, find_path};
use crate::io::animation::TerminalAnimator;
use crate::io::configuration::{DEFAULT_INTERVAL_US, GIF_FRAME_DELAY_MS};
use crate::io::error::{Result, terminal_error};
use crate::io::loader::{interior_index, load_map};
use crate::io::progress::SearchProgress;
use crate::io::render::render_report;
use crate::io::visualization::SearchRecording;

#[derive(Parser, Debug)]
#[command(name = "ucsgrid")]
#[command(
    author,
    version,
    about = "Find the cheapest route across a terrain map with uniform-cost search"
)]
/// Command-line arguments for the pathfinding tool
pub struct Cli {
    /// Terrain map, one character per square
    #[arg(value_name = "MAPFILE")]
    pub map: PathBuf,

    /// Start column (1-based, inside the map)
    pub x0: usize,

    /// Start row (1-based, inside the map)
    pub y0: usize,

    /// Goal column (1-based, inside the map)
    pub x1: usize,

    /// Goal row (1-based, inside the map)
    pub y1: usize,

    /// Microseconds between animation frames; 0 prints a static report
    #[arg(default_value_t = DEFAULT_INTERVAL_US)]
    pub interval: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Also write the search as an animated GIF
    #[arg(short, long, value_name = "PATH")]
    pub gif: Option<PathBuf>,

    /// Priority queue capacity (defaults to the map's cell count)
    #[arg(short, long)]
    pub capacity: Option<usize>,
}

impl Cli {
    /// Check if the search should be animated in the terminal
    pub const fn animated(&self) -> bool {
        self.interval > 0
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && !self.animated()
    }

    /// Engine settings derived from the arguments
    pub const fn search_config(&self) -> SearchConfig {
        SearchConfig {
            capacity: self.capacity,
        }
    }
}

/// Loads the map, runs one search and presents the result
pub struct SearchRunner {
    cli: Cli,
}

impl SearchRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run and print the report to standard output
    ///
    /// # Errors
    ///
    /// Returns an error if the map cannot be loaded, the coordinates are
    /// outside the map, the search fails, or output cannot be written
    pub fn run(&self) -> Result<SearchOutcome> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.run_with_output(&mut lock)
    }

    /// Run and write the static report to `out`
    ///
    /// Nothing is written to `out` in animated mode; the terminal view is
    /// the output.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`SearchRunner::run`]
    pub fn run_with_output<W: Write>(&self, out: &mut W) -> Result<SearchOutcome> {
        let cli = &self.cli;
        let mut grid = load_map(&cli.map)?;
        let start = interior_index(&grid, cli.x0, cli.y0)?;
        let goal = interior_index(&grid, cli.x1, cli.y1)?;

        let mut recording = cli.gif.as_ref().map(|_| SearchRecording::new(&grid));

        let outcome = if cli.animated() {
            let mut animator = TerminalAnimator::stdout(cli.interval);
            animator.start()?;
            let outcome = find_path(
                &mut grid,
                start,
                goal,
                cli.search_config(),
                (&mut animator, recording.as_mut()),
            )?;
            animator.finish(true)?;
            outcome
        } else {
            let mut progress = if cli.should_show_progress() {
                SearchProgress::new(&grid)
            } else {
                SearchProgress::hidden(&grid)
            };
            let outcome = find_path(
                &mut grid,
                start,
                goal,
                cli.search_config(),
                (&mut progress, recording.as_mut()),
            )?;
            progress.finish();

            out.write_all(render_report(&grid, &outcome).as_bytes())
                .map_err(terminal_error)?;
            outcome
        };

        if let (Some(gif_path), Some(recording)) = (&cli.gif, &recording) {
            recording.export_gif(gif_path, GIF_FRAME_DELAY_MS)?;
            info!(
                "wrote {} search events to '{}'",
                recording.change_count(),
                gif_path.display()
            );
        }

        Ok(outcome)
    }
}
