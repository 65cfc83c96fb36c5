//! Text rendering of grids and search results

use crate::algorithm::path::Path;
use crate::algorithm::search::SearchOutcome;
use crate::io::configuration::{GOAL_GLYPH, PATH_GLYPH, START_GLYPH};
use crate::spatial::grid::{Cell, Flag, Grid};
use crate::spatial::terrain::Terrain;

/// How a cell should be drawn, derived from its flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    /// Untouched passable terrain
    Terrain(Terrain),
    /// Impassable square
    Wall,
    /// Finalized cell
    Visited,
    /// Cell waiting in the queue
    Frontier,
    /// Cell on the reconstructed path
    Path,
    /// Search origin
    Start,
    /// Search target
    Goal,
}

impl Appearance {
    /// Classify a cell
    ///
    /// Later roles override earlier ones in the order impassable, visited,
    /// frontier, on-path, start, goal.
    pub fn of(cell: &Cell) -> Self {
        let flags = &cell.flags;
        if flags.contains(Flag::Goal) {
            Self::Goal
        } else if flags.contains(Flag::Start) {
            Self::Start
        } else if flags.contains(Flag::OnPath) {
            Self::Path
        } else if flags.contains(Flag::Frontier) {
            Self::Frontier
        } else if flags.contains(Flag::Visited) {
            Self::Visited
        } else if cell.is_passable() {
            Self::Terrain(cell.terrain)
        } else {
            Self::Wall
        }
    }

    /// Glyph for this appearance, falling back to the map glyph
    pub const fn glyph(self, map_glyph: char) -> char {
        match self {
            Self::Goal => GOAL_GLYPH,
            Self::Start => START_GLYPH,
            Self::Path | Self::Frontier => PATH_GLYPH,
            Self::Terrain(_) | Self::Wall | Self::Visited => map_glyph,
        }
    }
}

/// Glyph for a cell in the static report, where only the route is drawn
pub fn static_glyph(cell: &Cell) -> char {
    if cell.flags.contains(Flag::Goal) {
        GOAL_GLYPH
    } else if cell.flags.contains(Flag::Start) {
        START_GLYPH
    } else if cell.flags.contains(Flag::OnPath) {
        PATH_GLYPH
    } else {
        cell.glyph
    }
}

/// Interior of the grid as text, one line per row
pub fn render_map(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.len());
    for y in 1..grid.height().saturating_sub(1) {
        for x in 1..grid.width().saturating_sub(1) {
            if let Some(cell) = grid.cell_at(x, y) {
                out.push(static_glyph(cell));
            }
        }
        out.push('\n');
    }
    out
}

/// Route as `(x, y) -> (x, y) -> ...`
pub fn render_route(grid: &Grid, path: &Path) -> String {
    path.positions(grid)
        .iter()
        .map(|(x, y)| format!("({x}, {y})"))
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Final report printed when animation is disabled
pub fn render_report(grid: &Grid, outcome: &SearchOutcome) -> String {
    match outcome.path() {
        Some(path) => {
            let mut out = render_map(grid);
            out.push_str(&render_route(grid, path));
            out.push('\n');
            out.push_str(&format!("Path cost: {}\n", path.cost));
            out
        }
        None => "No path found.\n".to_string(),
    }
}
