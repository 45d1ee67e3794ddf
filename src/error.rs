//! Error types for position decoding and rules configuration.

use thiserror::Error;

use crate::pieces::{Player, Role};

/// Errors raised while parsing an encoded position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// No `|` separating the player tag from the board
    #[error("missing '|' after the player tag")]
    MissingSeparator,

    #[error("invalid player tag {tag:?} (expected 0 or 1)")]
    InvalidPlayer { tag: String },

    #[error("expected 64 square tokens, found {found}")]
    WrongSquareCount { found: usize },

    /// Token is neither `empty` nor `<owner>-<role>-<hp>`
    #[error("malformed token {token:?} at square {square}")]
    MalformedToken { square: usize, token: String },

    #[error("unknown role {name:?} at square {square}")]
    UnknownRole { square: usize, name: String },

    #[error("invalid hit points {raw:?} at square {square}")]
    InvalidHitPoints { square: usize, raw: String },

    /// Dead pieces never stand on the board
    #[error("non-positive hit points {hp} at square {square}")]
    DeadPieceOnBoard { square: usize, hp: i32 },

    #[error("player {player:?} has a fourth living pawn at square {square}")]
    TooManyPawns { player: Player, square: usize },

    #[error("player {player:?} has a second living {role:?} at square {square}")]
    DuplicatePiece {
        player: Player,
        role: Role,
        square: usize,
    },
}

/// Errors raised while loading a [`crate::config::RulesConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}
