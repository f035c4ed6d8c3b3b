//! Game events and observers.
//!
//! The engine never draws anything. Every state change is reported as a
//! [`GameEvent`], and anything that wants to show the game (a terminal
//! renderer, a test log) implements [`GameObserver`] and subscribes to a
//! session.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

use crate::core::PlayerId;
use crate::rules::WinningLine;

/// Something that happened during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh game began on an empty board.
    GameStarted {
        height: usize,
        width: usize,
        first: PlayerId,
    },

    /// A piece landed at `(row, column)`.
    PiecePlaced {
        row: usize,
        column: usize,
        player: PlayerId,
    },

    /// It is now `player`'s turn.
    TurnChanged { player: PlayerId },

    /// A drop into `column` was refused because the column is full.
    ColumnFull { column: usize },

    /// `player` completed four in a row. Terminal.
    GameWon { player: PlayerId, line: WinningLine },

    /// The board filled with no winner. Terminal.
    GameTied,

    /// A player's session score changed.
    ScoreUpdated { player: PlayerId, score: u32 },
}

impl GameEvent {
    /// The player the event concerns, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::GameStarted { first, .. } => Some(*first),
            GameEvent::PiecePlaced { player, .. }
            | GameEvent::TurnChanged { player }
            | GameEvent::GameWon { player, .. }
            | GameEvent::ScoreUpdated { player, .. } => Some(*player),
            GameEvent::ColumnFull { .. } | GameEvent::GameTied => None,
        }
    }

    /// Check if this event ends the game.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::GameWon { .. } | GameEvent::GameTied)
    }
}

/// Receives events as they happen.
///
/// Observers are called synchronously, in subscription order, before the
/// call that produced the event returns.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// An observer that records every event it sees.
///
/// Clones share the same buffer, so one handle can be subscribed while
/// another is kept for reading.
///
/// ```
/// use connect_four::engine::{EventLog, GameEvent, GameObserver};
///
/// let log = EventLog::new();
/// let mut handle = log.clone();
/// handle.on_event(&GameEvent::GameTied);
///
/// assert_eq!(log.events(), vec![GameEvent::GameTied]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of everything recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Remove and return everything recorded so far.
    pub fn take(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl GameObserver for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
