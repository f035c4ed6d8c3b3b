//! Error types.
//!
//! None of these are fatal. A rejected drop leaves the game exactly as it
//! was, so callers can report the condition and wait for the next input.

use thiserror::Error;

/// Why a piece could not be dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DropError {
    /// Column index outside `0..width`.
    #[error("column {column} is out of range (board has {width} columns)")]
    InvalidColumn { column: usize, width: usize },

    /// Every cell in the column is occupied.
    #[error("column {column} is full")]
    ColumnFull { column: usize },

    /// The game is already won or tied.
    #[error("game already ended")]
    GameAlreadyEnded,
}

/// Invalid game or player configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Board dimensions must each be in `1..=255`.
    #[error("invalid board dimensions {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },

    /// Color string is not `#rrggbb`.
    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),

    /// Seat index other than 0 or 1.
    #[error("invalid player seat {0}")]
    InvalidPlayer(u8),

    /// Cell data does not cover the board exactly.
    #[error("expected {expected} cells, found {found}")]
    CellCount { expected: usize, found: usize },
}

/// Errors raised by the session layer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No game has been started yet.
    #[error("no game has been started")]
    NotStarted,

    /// The requested change is only allowed between games.
    #[error("a game is in progress")]
    GameInProgress,

    /// The engine rejected the drop.
    #[error(transparent)]
    Drop(#[from] DropError),

    /// The session configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
