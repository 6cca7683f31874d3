//! Field unit of the level grid
//!
//! A level is composed entirely of these units: each field binds one grid
//! coordinate to one tile kind.

use crate::tiles::Tile;
use pacman_core::Coordinate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single grid cell
///
/// Both the coordinate and the tile stay mutable after construction, but a
/// field always carries a tile; there is no unset state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Grid position of this cell
    coordinate: Coordinate,

    /// Tile kind of this cell
    tile: Tile,
}

impl Field {
    /// Create a new field
    pub const fn new(coordinate: Coordinate, tile: Tile) -> Self {
        Self { coordinate, tile }
    }

    /// Grid position of this field
    #[inline]
    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Move this field to a new position
    pub fn set_coordinate(&mut self, coordinate: Coordinate) {
        self.coordinate = coordinate;
    }

    /// Tile kind of this field
    #[inline]
    pub const fn tile(&self) -> Tile {
        self.tile
    }

    /// Replace the tile kind of this field
    pub fn set_tile(&mut self, tile: Tile) {
        self.tile = tile;
    }

    /// True if this field blocks movement (wall or background)
    #[inline]
    pub const fn is_solid(&self) -> bool {
        self.tile.is_solid()
    }

    /// True if this field is a wall
    #[inline]
    pub const fn is_wall(&self) -> bool {
        self.tile.is_wall()
    }

    /// True if this field is open space or a dot
    #[inline]
    pub const fn is_free(&self) -> bool {
        self.tile.is_free()
    }

    /// True if this field is a dot
    #[inline]
    pub const fn is_dot(&self) -> bool {
        self.tile.is_dot()
    }
}

impl fmt::Display for Field {
    /// A field's text form is exactly its tile's encoding character
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tile.glyph())
    }
}
