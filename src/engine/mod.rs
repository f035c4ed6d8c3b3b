//! The game engine and the events it emits.

pub mod event;
pub mod game;

pub use event::{EventLog, GameEvent, GameObserver};
pub use game::{EventBatch, GameEngine, MoveRecord, Placement};
