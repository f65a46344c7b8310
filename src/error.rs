//! Error types for the engine and its configuration

use std::fmt;
use std::path::PathBuf;

use crate::board::{Pos, Stone};

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    /// Position lies outside the board.
    OutOfBounds { size: usize },
    /// Cell already holds a stone.
    Occupied(Stone),
    /// Attempted to place `Stone::Empty`.
    NoStone,
    /// The reported opponent move is not an opponent stone on the board.
    NotOpponentStone,
}

impl fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMoveReason::OutOfBounds { size } => {
                write!(f, "outside the {size}x{size} board")
            }
            InvalidMoveReason::Occupied(stone) => write!(f, "already occupied by {stone:?}"),
            InvalidMoveReason::NoStone => write!(f, "no stone to place"),
            InvalidMoveReason::NotOpponentStone => write!(f, "not an opponent stone"),
        }
    }
}

/// Errors surfaced by board mutation and move selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid move at {pos}: {reason}")]
    InvalidMove {
        pos: Pos,
        reason: InvalidMoveReason,
    },

    #[error("no candidate moves available")]
    NoCandidates,
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
