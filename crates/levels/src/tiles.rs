//! Tile system for levels
//!
//! Every cell of a level grid is classified by one of a closed set of tile
//! kinds. Each kind has a canonical single-character encoding used by the
//! text level format, and the character-to-kind mapping is bijective.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic classification of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// Impassable maze wall
    Wall,

    /// Decoration outside the maze, impassable
    Background,

    /// Open walkable space
    Space,

    /// Collectible dot
    Dot,

    /// Player spawn marker
    PlayerSpawn,

    /// Ghost spawn marker
    GhostSpawn,
}

impl Tile {
    /// Canonical character encoding of this tile
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Background => 'B',
            Tile::Space => ' ',
            Tile::Dot => '.',
            Tile::PlayerSpawn => 'P',
            Tile::GhostSpawn => 'G',
        }
    }

    /// Look up the tile encoded by `c`, or `None` if no tile matches
    pub const fn from_glyph(c: char) -> Option<Tile> {
        match c {
            '#' => Some(Tile::Wall),
            'B' => Some(Tile::Background),
            ' ' => Some(Tile::Space),
            '.' => Some(Tile::Dot),
            'P' => Some(Tile::PlayerSpawn),
            'G' => Some(Tile::GhostSpawn),
            _ => None,
        }
    }

    /// Check if `c` encodes a tile
    #[inline]
    pub const fn is_valid_glyph(c: char) -> bool {
        Tile::from_glyph(c).is_some()
    }

    /// True for tiles that block movement (wall or background)
    #[inline]
    pub const fn is_solid(self) -> bool {
        matches!(self, Tile::Wall | Tile::Background)
    }

    /// True only for walls
    #[inline]
    pub const fn is_wall(self) -> bool {
        matches!(self, Tile::Wall)
    }

    /// True for tiles entities may freely occupy (space or dot)
    ///
    /// Spawn markers are traversable but not free.
    #[inline]
    pub const fn is_free(self) -> bool {
        matches!(self, Tile::Space | Tile::Dot)
    }

    /// True only for dots
    #[inline]
    pub const fn is_dot(self) -> bool {
        matches!(self, Tile::Dot)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
