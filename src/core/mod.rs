//! Core types: players, colors, configuration, the grid and errors.
//!
//! Nothing here knows about turns or winning; that lives in `rules` and
//! `engine`.

pub mod color;
pub mod config;
pub mod error;
pub mod grid;
pub mod player;

pub use color::Color;
pub use config::{GameConfig, CONNECT, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION};
pub use error::{ConfigError, DropError, SessionError};
pub use grid::{Cell, Grid};
pub use player::{Player, PlayerId, PlayerMap, PLAYER_COUNT};
