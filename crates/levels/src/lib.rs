//! # Pacman Levels System
//!
//! This crate handles level loading, parsing, and validation for the Pacman game.
//!
//! ## Features
//! - Text-based level format parser
//! - Character-to-tile mapping
//! - Spawn point registries (player and ghost)
//! - Toroidal reachability validation
//! - Navigation queries (sight lines, neighbors, random free cells)
//!
//! ## Level Format
//!
//! Levels are stored as rectangular blocks of text, one character per cell,
//! one line per row:
//! - **`#`**: wall
//! - **`B`**: background (decoration outside the maze)
//! - **` `**: open space
//! - **`.`**: dot
//! - **`P`**: player spawn point
//! - **`G`**: ghost spawn point
//!
//! Dimensions are inferred from the line count and the first line's length;
//! there is no header.

pub mod error;
pub mod field;
pub mod level;
pub mod parser;
pub mod tiles;

pub use error::{LevelError, Result};
pub use field::Field;
pub use level::{Level, UNNAMED_LEVEL};
pub use parser::{level_name_from_path, list_level_files, LevelParser, ParseOptions};
pub use tiles::Tile;
