//! The game engine: one board, one playthrough.
//!
//! `GameEngine` owns the grid, whose turn it is and whether the game is
//! still running. It buffers the events each call produces; the session
//! drains them and hands them to observers.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use super::event::GameEvent;
use crate::core::{ConfigError, DropError, GameConfig, Grid, PlayerId};
use crate::rules::{self, GameStatus, Position, WinningLine};

/// Events produced by a single engine call.
pub type EventBatch = SmallVec<[GameEvent; 4]>;

/// A successful drop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Where the piece landed.
    pub position: Position,

    /// Who dropped it.
    pub player: PlayerId,

    /// Game status after the drop.
    pub status: GameStatus,
}

/// A recorded placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 0-based index of the move within the game.
    pub sequence: u32,

    pub player: PlayerId,

    pub position: Position,
}

/// A single game of Connect Four.
///
/// Events queue up until [`GameEngine::drain_events`] takes them. A game
/// queues at most a few per placement, so the queue is bounded by the
/// board size even if nobody drains it.
///
/// ## Example
///
/// ```
/// use connect_four::core::{GameConfig, PlayerId};
/// use connect_four::engine::GameEngine;
///
/// let mut game = GameEngine::new(GameConfig::default()).unwrap();
/// let placement = game.drop_piece(3).unwrap();
///
/// assert_eq!(placement.position.row, 5);
/// assert_eq!(placement.player, PlayerId::FIRST);
/// assert_eq!(game.current_player(), PlayerId::SECOND);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    current: PlayerId,
    status: GameStatus,
    history: Vector<MoveRecord>,
    pending: EventBatch,
}

impl GameEngine {
    /// Start a game on an empty board. The first player moves first.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let config = config.validated()?;
        let first = PlayerId::FIRST;

        let mut pending = EventBatch::new();
        pending.push(GameEvent::GameStarted {
            height: config.height,
            width: config.width,
            first,
        });
        debug!(height = config.height, width = config.width, "game started");

        Ok(Self {
            config,
            grid: Grid::new(&config),
            current: first,
            status: GameStatus::InPlay,
            history: Vector::new(),
            pending,
        })
    }

    /// Start a game with explicit dimensions.
    pub fn start(height: usize, width: usize) -> Result<Self, ConfigError> {
        Self::new(GameConfig::new(height, width)?)
    }

    // === Moves ===

    /// Drop the current player's piece into `column`.
    ///
    /// The piece lands on the lowest empty row. A win is checked before a
    /// tie, so a move that both completes a line and fills the board is a
    /// win. If the game continues the turn passes to the other player.
    ///
    /// Rejected drops change nothing and queue no events.
    pub fn drop_piece(&mut self, column: usize) -> Result<Placement, DropError> {
        if !self.status.is_in_play() {
            debug!(column, "drop ignored, game already ended");
            return Err(DropError::GameAlreadyEnded);
        }
        if column >= self.config.width {
            debug!(column, width = self.config.width, "drop outside the board");
            return Err(DropError::InvalidColumn {
                column,
                width: self.config.width,
            });
        }
        let Some(row) = self.grid.find_spot(column) else {
            debug!(column, "column full");
            return Err(DropError::ColumnFull { column });
        };

        let player = self.current;
        let position = Position::new(row, column);
        self.grid.occupy(row, column, player);
        self.history.push_back(MoveRecord {
            sequence: self.history.len() as u32,
            player,
            position,
        });
        self.pending.push(GameEvent::PiecePlaced { row, column, player });
        debug!(row, column, %player, "piece placed");

        if let Some(line) = self.check_win(position) {
            info!(%player, ?line, "game won");
            self.status = GameStatus::Won { winner: player, line };
            self.pending.push(GameEvent::GameWon { player, line });
        } else if self.check_tie() {
            info!(moves = self.history.len(), "game tied");
            self.status = GameStatus::Tied;
            self.pending.push(GameEvent::GameTied);
        } else {
            self.current = player.opponent();
            self.pending.push(GameEvent::TurnChanged {
                player: self.current,
            });
        }

        Ok(Placement {
            position,
            player,
            status: self.status,
        })
    }

    /// Check for a line through the piece at `position`.
    ///
    /// Only meaningful for the most recent placement.
    #[must_use]
    pub fn check_win(&self, position: Position) -> Option<WinningLine> {
        rules::check_win(&self.grid, position)
    }

    /// True iff every cell is occupied.
    #[must_use]
    pub fn check_tie(&self) -> bool {
        rules::check_tie(&self.grid)
    }

    // === Events ===

    /// Take the events produced since the last drain.
    pub fn drain_events(&mut self) -> EventBatch {
        std::mem::take(&mut self.pending)
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The player to move, or the last mover once the game is over.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_in_play(&self) -> bool {
        self.status.is_in_play()
    }

    /// Placements in the order they were made.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    #[must_use]
    pub fn is_column_full(&self, column: usize) -> bool {
        self.grid.is_column_full(column)
    }

    /// Columns that can still take a piece. Empty once the game is over.
    #[must_use]
    pub fn legal_columns(&self) -> Vec<usize> {
        if !self.is_in_play() {
            return Vec::new();
        }
        (0..self.config.width)
            .filter(|&c| !self.grid.is_column_full(c))
            .collect()
    }

    /// Columns with no empty cell left.
    #[must_use]
    pub fn full_columns(&self) -> Vec<usize> {
        (0..self.config.width)
            .filter(|&c| self.grid.is_column_full(c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;
    use crate::rules::Direction;

    const A: PlayerId = PlayerId::FIRST;
    const B: PlayerId = PlayerId::SECOND;

    fn play(game: &mut GameEngine, columns: &[usize]) {
        for &c in columns {
            game.drop_piece(c).unwrap();
        }
    }

    #[test]
    fn test_new_game() {
        let mut game = GameEngine::new(GameConfig::default()).unwrap();
        assert!(game.is_in_play());
        assert_eq!(game.current_player(), A);
        assert_eq!(game.grid().occupied_count(), 0);
        assert_eq!(game.legal_columns(), (0..7).collect::<Vec<_>>());
        assert_eq!(
            game.drain_events().into_vec(),
            vec![GameEvent::GameStarted {
                height: 6,
                width: 7,
                first: A
            }]
        );
        assert!(game.drain_events().is_empty());
    }

    #[test]
    fn test_start_validates() {
        assert!(GameEngine::start(0, 7).is_err());
        assert!(GameEngine::start(6, 7).is_ok());
    }

    #[test]
    fn test_drop_lands_bottom_and_swaps_turn() {
        let mut game = GameEngine::new(GameConfig::default()).unwrap();
        game.drain_events();

        let first = game.drop_piece(3).unwrap();
        assert_eq!(first.position, Position::new(5, 3));
        assert_eq!(first.player, A);
        assert_eq!(first.status, GameStatus::InPlay);

        let second = game.drop_piece(3).unwrap();
        assert_eq!(second.position, Position::new(4, 3));
        assert_eq!(second.player, B);

        assert_eq!(game.grid().get(5, 3), Some(Cell::Occupied(A)));
        assert_eq!(game.grid().get(4, 3), Some(Cell::Occupied(B)));
        assert_eq!(game.current_player(), A);

        let events = game.drain_events();
        assert_eq!(
            events.into_vec(),
            vec![
                GameEvent::PiecePlaced { row: 5, column: 3, player: A },
                GameEvent::TurnChanged { player: B },
                GameEvent::PiecePlaced { row: 4, column: 3, player: B },
                GameEvent::TurnChanged { player: A },
            ]
        );
    }

    #[test]
    fn test_invalid_column() {
        let mut game = GameEngine::new(GameConfig::default()).unwrap();
        game.drain_events();

        assert_eq!(
            game.drop_piece(7),
            Err(DropError::InvalidColumn { column: 7, width: 7 })
        );
        assert_eq!(game.grid().occupied_count(), 0);
        assert_eq!(game.current_player(), A);
        assert!(game.drain_events().is_empty());
    }

    #[test]
    fn test_column_full_changes_nothing() {
        let mut game = GameEngine::start(2, 3).unwrap();
        play(&mut game, &[0, 0]);
        game.drain_events();

        let before = game.grid().clone();
        assert_eq!(game.drop_piece(0), Err(DropError::ColumnFull { column: 0 }));
        assert_eq!(game.grid(), &before);
        assert_eq!(game.current_player(), A);
        assert_eq!(game.history().len(), 2);
        assert!(game.drain_events().is_empty());
        assert_eq!(game.full_columns(), vec![0]);
        assert_eq!(game.legal_columns(), vec![1, 2]);
    }

    #[test]
    fn test_vertical_win_ends_game() {
        let mut game = GameEngine::new(GameConfig::default()).unwrap();
        play(&mut game, &[0, 1, 0, 1, 0, 1]);
        game.drain_events();

        let placement = game.drop_piece(0).unwrap();
        let GameStatus::Won { winner, line } = placement.status else {
            panic!("expected a win, got {:?}", placement.status);
        };
        assert_eq!(winner, A);
        assert_eq!(line.direction, Direction::Vertical);
        assert!(!game.is_in_play());
        assert_eq!(game.current_player(), A);

        let events = game.drain_events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1], GameEvent::GameWon { player: A, line });
    }

    #[test]
    fn test_no_moves_after_game_ends() {
        let mut game = GameEngine::new(GameConfig::default()).unwrap();
        play(&mut game, &[0, 1, 0, 1, 0, 1, 0]);
        game.drain_events();

        let before = game.grid().clone();
        assert_eq!(game.drop_piece(2), Err(DropError::GameAlreadyEnded));
        assert_eq!(game.drop_piece(99), Err(DropError::GameAlreadyEnded));
        assert_eq!(game.grid(), &before);
        assert!(game.drain_events().is_empty());
        assert!(game.legal_columns().is_empty());
    }

    #[test]
    fn test_tie_on_small_board() {
        // 1x3 board: nobody can reach four.
        let mut game = GameEngine::start(1, 3).unwrap();
        play(&mut game, &[0, 1]);
        assert!(!game.check_tie());

        let last = game.drop_piece(2).unwrap();
        assert_eq!(last.status, GameStatus::Tied);
        assert!(game.check_tie());
        assert!(game.drain_events().ends_with(&[GameEvent::GameTied]));
    }

    #[test]
    fn test_history_records_moves() {
        let mut game = GameEngine::new(GameConfig::default()).unwrap();
        play(&mut game, &[4, 4, 2]);

        let history: Vec<_> = game.history().iter().copied().collect();
        assert_eq!(history.len(), 3);
        assert_eq!(
            history[2],
            MoveRecord {
                sequence: 2,
                player: A,
                position: Position::new(5, 2)
            }
        );
        assert_eq!(game.last_move(), Some(&history[2]));
    }
}
