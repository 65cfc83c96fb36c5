//! CLI entry point for the terrain pathfinding tool

use std::process::ExitCode;

use clap::Parser;
use ucsgrid::io::cli::{Cli, SearchRunner};

// Allow print for the diagnostic shown on failure
#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match SearchRunner::new(cli).run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("ucsgrid: {error}");
            ExitCode::FAILURE
        }
    }
}
