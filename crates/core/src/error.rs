//! Core error types for the Pacman game

#[derive(thiserror::Error, Debug)]
pub enum PacmanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Level error: {0}")]
    Level(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, PacmanError>;
