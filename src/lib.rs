//! # connect-four
//!
//! A Connect Four engine: two players take turns dropping pieces into the
//! columns of a 6×7 grid until one of them lines up four in a row or the
//! board fills.
//!
//! ## Design Principles
//!
//! 1. **Anchored win detection**: after each drop only lines through the
//!    new piece are examined, never the whole board.
//!
//! 2. **Events, not drawing**: the engine reports what happened as
//!    `GameEvent`s. Renderers subscribe; the engine knows nothing of them.
//!
//! 3. **Explicit ownership**: a `Session` owns the players, their scores
//!    and the current game. Restarting builds a fresh engine.
//!
//! ## Modules
//!
//! - `core`: players, colors, configuration, the grid, errors
//! - `rules`: four-in-a-row detection and game outcomes
//! - `engine`: `GameEngine` and its events
//! - `session`: multi-game sessions with scores and observers
//! - `render`: terminal rendering

pub mod core;
pub mod engine;
pub mod render;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Cell, Color, ConfigError, DropError, GameConfig, Grid, Player, PlayerId, PlayerMap,
    SessionError, CONNECT, DEFAULT_HEIGHT, DEFAULT_WIDTH,
};

pub use crate::rules::{Direction, GameResult, GameStatus, Position, WinningLine};

pub use crate::engine::{EventLog, GameEngine, GameEvent, GameObserver, MoveRecord, Placement};

pub use crate::session::{Scoreboard, Session, SessionPhase, SubscriptionId};

pub use crate::render::{render_board, TextRenderer};
