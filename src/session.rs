//! Play sessions.
//!
//! A `Session` is what a front end talks to. It owns the two player
//! records, the current game (if any) and the subscribed observers. Scores
//! live here and survive from one game to the next; the engine only says
//! who won.
//!
//! Starting a game always builds a fresh `GameEngine`, so nothing from the
//! previous board leaks into the next one.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::core::{Color, DropError, GameConfig, Player, PlayerId, PlayerMap, SessionError};
use crate::engine::{GameEngine, GameEvent, GameObserver, Placement};
use crate::rules::GameStatus;

/// Handle returned by [`Session::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubscriptionId(pub u32);

/// Where the session is in the game lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No game has been started.
    NotStarted,
    InPlay,
    Won(PlayerId),
    Tied,
}

/// Session totals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub scores: PlayerMap<u32>,
    /// Completed games, won or tied.
    pub games_played: u32,
    pub ties: u32,
}

/// A sequence of games between the same two players.
pub struct Session {
    config: GameConfig,
    players: PlayerMap<Player>,
    engine: Option<GameEngine>,
    observers: FxHashMap<SubscriptionId, Box<dyn GameObserver>>,
    next_subscription: u32,
    games_played: u32,
    ties: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_players(
            GameConfig::default(),
            PlayerMap::new(Player::default_for),
        )
    }
}

impl Session {
    /// Create a session with default players.
    pub fn new(config: GameConfig) -> Result<Self, SessionError> {
        let config = config.validated()?;
        Ok(Self::with_players(config, PlayerMap::new(Player::default_for)))
    }

    /// Create a session with the given player records.
    ///
    /// Existing scores are kept, which lets a front end carry them over.
    #[must_use]
    pub fn with_players(config: GameConfig, players: PlayerMap<Player>) -> Self {
        Self {
            config,
            players,
            engine: None,
            observers: FxHashMap::default(),
            next_subscription: 0,
            games_played: 0,
            ties: 0,
        }
    }

    // === Observers ===

    /// Register an observer. It receives every event from now on.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.insert(id, Box::new(observer));
        id
    }

    /// Remove an observer. Returns false if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(&id).is_some()
    }

    fn dispatch(&mut self, events: &[GameEvent]) {
        if events.is_empty() {
            return;
        }
        // Subscription order.
        let mut ids: SmallVec<[SubscriptionId; 4]> = self.observers.keys().copied().collect();
        ids.sort_unstable();

        for event in events {
            for id in &ids {
                if let Some(observer) = self.observers.get_mut(id) {
                    observer.on_event(event);
                }
            }
        }
    }

    // === Games ===

    /// Start a new game, replacing a finished one.
    ///
    /// If both players picked the same color, both fall back to the default
    /// palette. Fails while a game is still being played.
    pub fn start_game(&mut self) -> Result<(), SessionError> {
        if self.engine.as_ref().is_some_and(GameEngine::is_in_play) {
            return Err(SessionError::GameInProgress);
        }

        if self.players[PlayerId::FIRST].color == self.players[PlayerId::SECOND].color {
            debug!("players share a color, using defaults");
            for (id, player) in self.players.iter_mut() {
                player.color = Color::default_for(id);
            }
        }

        let mut engine = GameEngine::new(self.config)?;
        let events = engine.drain_events();
        self.engine = Some(engine);
        info!(game = self.games_played + 1, "new game");

        self.dispatch(&events);
        Ok(())
    }

    /// Drop the current player's piece into `column`.
    ///
    /// Observers see the engine's events, followed by `ScoreUpdated` when
    /// the move wins. A drop into a full column is announced with
    /// `ColumnFull`. Rejected drops are returned as errors and leave the
    /// game unchanged.
    pub fn drop_piece(&mut self, column: usize) -> Result<Placement, SessionError> {
        let engine = self.engine.as_mut().ok_or(SessionError::NotStarted)?;
        let result = engine.drop_piece(column);
        let mut events = engine.drain_events();

        match &result {
            Err(DropError::ColumnFull { column }) => {
                events.push(GameEvent::ColumnFull { column: *column });
            }
            Err(_) => {}
            Ok(placement) => match placement.status {
                GameStatus::Won { winner, .. } => {
                    let player = &mut self.players[winner];
                    player.score += 1;
                    self.games_played += 1;
                    info!(winner = %player.name, score = player.score, "score updated");
                    events.push(GameEvent::ScoreUpdated {
                        player: winner,
                        score: player.score,
                    });
                }
                GameStatus::Tied => {
                    self.games_played += 1;
                    self.ties += 1;
                }
                GameStatus::InPlay => {}
            },
        }

        self.dispatch(&events);
        Ok(result?)
    }

    /// Change a player's color. Only allowed between games.
    pub fn set_color(&mut self, player: PlayerId, color: Color) -> Result<(), SessionError> {
        if self.phase() == SessionPhase::InPlay {
            return Err(SessionError::GameInProgress);
        }
        self.players[player].color = color;
        Ok(())
    }

    // === Queries ===

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match self.engine.as_ref().map(GameEngine::status) {
            None => SessionPhase::NotStarted,
            Some(GameStatus::InPlay) => SessionPhase::InPlay,
            Some(GameStatus::Won { winner, .. }) => SessionPhase::Won(winner),
            Some(GameStatus::Tied) => SessionPhase::Tied,
        }
    }

    /// The current (or most recent) game.
    #[must_use]
    pub fn engine(&self) -> Option<&GameEngine> {
        self.engine.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard {
            scores: PlayerMap::new(|id| self.players[id].score),
            games_played: self.games_played,
            ties: self.ties,
        }
    }
}
