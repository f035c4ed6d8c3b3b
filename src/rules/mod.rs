//! Game rules: line detection and game outcomes.
//!
//! These are free functions over a `Grid` so they can be called on any
//! snapshot, not just the engine's live board.

pub mod outcome;
pub mod win;

pub use outcome::{GameResult, GameStatus};
pub use win::{check_tie, check_win, scan_for_win, Direction, Position, WinningLine};
