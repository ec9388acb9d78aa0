use std::path::PathBuf;

use crate::game::{Player, COLS};

/// A rejected move. The board it was attempted on is left unchanged, so the
/// caller can simply pick another column.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is outside the board (expected 0..{cols})", cols = COLS)]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),
}

impl MoveError {
    /// The column that was rejected.
    pub fn column(&self) -> usize {
        match self {
            MoveError::InvalidColumn(col) | MoveError::ColumnFull(col) => *col,
        }
    }
}

/// Violated preconditions of a search call. These are programming errors on
/// the caller's side and are not expected during normal play.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no legal move: the game is already over")]
    NoLegalMove,

    #[error("search depth must be > 0")]
    ZeroDepth,

    #[error("searching for {perspective} but {to_move} is to move")]
    WrongPerspective { perspective: Player, to_move: Player },
}

/// Errors that can occur while playing out a game between two agents.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("agent {agent} selected illegal column {column} (legal: {legal:?})")]
    IllegalAction {
        agent: String,
        column: usize,
        legal: Vec<usize>,
    },

    #[error("search failed: {0}")]
    Search(#[from] SearchError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
