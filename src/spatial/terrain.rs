//! Terrain classes and their traversal costs

use crate::io::configuration::{DENSE_COST, PLAIN_COST, ROUGH_COST, STEEP_COST};

/// Terrain class of a single map square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terrain {
    /// Open ground, `.`
    Plain,
    /// Rough ground, `:`
    Rough,
    /// Dense ground, `=`
    Dense,
    /// Steep ground, `+`
    Steep,
    /// Anything else, including `#`
    Wall,
}

impl Terrain {
    /// Classify a map glyph
    ///
    /// Unknown glyphs are treated as walls.
    pub const fn from_glyph(glyph: char) -> Self {
        match glyph {
            '.' => Self::Plain,
            ':' => Self::Rough,
            '=' => Self::Dense,
            '+' => Self::Steep,
            _ => Self::Wall,
        }
    }

    /// Cost of entering a square of this terrain, `None` if impassable
    pub const fn cost(self) -> Option<u32> {
        match self {
            Self::Plain => Some(PLAIN_COST),
            Self::Rough => Some(ROUGH_COST),
            Self::Dense => Some(DENSE_COST),
            Self::Steep => Some(STEEP_COST),
            Self::Wall => None,
        }
    }

    /// Whether a square of this terrain can be entered
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// Traversal cost for a map glyph, `None` if impassable
pub const fn glyph_cost(glyph: char) -> Option<u32> {
    Terrain::from_glyph(glyph).cost()
}
