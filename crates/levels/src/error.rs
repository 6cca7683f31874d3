//! Error types for the levels crate

use pacman_core::PacmanError;

/// Level-specific error types
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    /// File I/O error
    #[error("File error: {0}")]
    FileError(#[from] std::io::Error),

    /// Level file not found or unreadable
    #[error("Level not found: {0}")]
    NotFound(String),

    /// A required input was empty
    #[error("Empty argument: {0}")]
    EmptyArgument(&'static str),

    /// Empty or non-rectangular level text
    #[error("Invalid level format: {0}")]
    InvalidFormat(String),

    /// A character with no tile mapping
    #[error("Invalid level character: '{0}'")]
    InvalidCharacter(char),

    /// Level has no player spawn point
    #[error("Level has no player spawn point")]
    NoPlayerSpawn,

    /// Level has no ghost spawn point
    #[error("Level has no ghost spawn point")]
    NoGhostSpawn,

    /// Level has no dots to collect
    #[error("Level has no dots")]
    NoDots,

    /// A dot that cannot be reached from the player spawns
    #[error("Unreachable dot in level '{level}' at ({x}, {y})")]
    UnreachableDot { level: String, x: i32, y: i32 },
}

impl From<LevelError> for PacmanError {
    fn from(err: LevelError) -> Self {
        PacmanError::Level(err.to_string())
    }
}

/// Result type for level operations
pub type Result<T> = std::result::Result<T, LevelError>;
