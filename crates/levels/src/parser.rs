//! Level text format parser
//!
//! Translates the character-grid level format into [`Level`] values and
//! derives display names from level file paths.

use crate::error::{LevelError, Result};
use crate::field::Field;
use crate::level::Level;
use crate::tiles::Tile;
use pacman_core::Coordinate;
use std::fs;
use std::path::Path;

/// Parser configuration
///
/// The default is strict. `allow_missing_player_spawn` lets fixture levels
/// without a player spawn marker through the parse step; `Level::validate`
/// still rejects them before play.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Accept levels without a player spawn marker
    pub allow_missing_player_spawn: bool,
}

/// Level file parser
pub struct LevelParser;

impl LevelParser {
    /// Load a level from a file
    ///
    /// The display name is derived from the file name.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Level> {
        Self::parse_file_with(path, ParseOptions::default())
    }

    /// Load a level from a file with explicit parser options
    pub fn parse_file_with<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Level> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(LevelError::EmptyArgument("path"));
        }

        let content = fs::read_to_string(path)
            .map_err(|_| LevelError::NotFound(path.display().to_string()))?;

        let mut level = Self::parse_text_with(&content, options)?;
        level.set_name(level_name_from_path(&path.to_string_lossy()));

        tracing::debug!("loaded level '{}' from {}", level.name(), path.display());
        Ok(level)
    }

    /// Parse a level from text
    pub fn parse_text(content: &str) -> Result<Level> {
        Self::parse_text_with(content, ParseOptions::default())
    }

    /// Parse a level from text with explicit parser options
    ///
    /// The text must form a rectangular block, one tile character per cell,
    /// one line per row; both `\n` and `\r\n` terminators are accepted.
    /// Player and ghost spawn markers are collected into the level's spawn
    /// registries in row-major scan order. The result carries the
    /// placeholder name.
    pub fn parse_text_with(content: &str, options: ParseOptions) -> Result<Level> {
        let lines: Vec<&str> = content.lines().collect();
        if lines.is_empty() {
            return Err(LevelError::InvalidFormat("empty level text".into()));
        }

        let width = lines[0].chars().count();
        let height = lines.len();
        if width == 0 {
            return Err(LevelError::InvalidFormat("empty first row".into()));
        }

        let mut fields = Vec::with_capacity(width * height);
        let mut player_spawns = Vec::new();
        let mut ghost_spawns = Vec::new();

        for (y, line) in lines.iter().enumerate() {
            let row_len = line.chars().count();
            if row_len != width {
                return Err(LevelError::InvalidFormat(format!(
                    "row {y} has length {row_len}, expected {width}"
                )));
            }

            for (x, c) in line.chars().enumerate() {
                let tile = Tile::from_glyph(c).ok_or(LevelError::InvalidCharacter(c))?;
                let coordinate = Coordinate::new(x as i32, y as i32);
                fields.push(Field::new(coordinate, tile));

                match tile {
                    Tile::PlayerSpawn => player_spawns.push(coordinate),
                    Tile::GhostSpawn => ghost_spawns.push(coordinate),
                    _ => {}
                }
            }
        }

        if player_spawns.is_empty() && !options.allow_missing_player_spawn {
            return Err(LevelError::NoPlayerSpawn);
        }

        tracing::debug!(
            "parsed {}x{} level with {} player spawns and {} ghost spawns",
            width,
            height,
            player_spawns.len(),
            ghost_spawns.len()
        );

        Ok(Level::new(width, height, fields, player_spawns, ghost_spawns))
    }
}

/// Derive a display name from a level file path
///
/// Strips directory components (both `/` and `\` separators) and the final
/// dotted extension, and substitutes underscores with spaces.
pub fn level_name_from_path(path: &str) -> String {
    let mut name = path;
    if let Some(pos) = name.rfind('/') {
        name = &name[pos + 1..];
    }
    if let Some(pos) = name.rfind('\\') {
        name = &name[pos + 1..];
    }
    if let Some(pos) = name.rfind('.') {
        name = &name[..pos];
    }
    name.replace('_', " ")
}

/// List the level file names in a directory
///
/// Returns the plain file names sorted alphabetically; subdirectories are
/// skipped.
pub fn list_level_files<P: AsRef<Path>>(dir: P) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir.as_ref())? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}
