//! Game status and final results.

use serde::{Deserialize, Serialize};

use super::win::WinningLine;
use crate::core::PlayerId;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Board filled with no winner.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Where a game is in its lifecycle.
///
/// `InPlay` moves to `Won` or `Tied` exactly once and never back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InPlay,
    Won {
        winner: PlayerId,
        line: WinningLine,
    },
    Tied,
}

impl GameStatus {
    #[must_use]
    pub fn is_in_play(&self) -> bool {
        matches!(self, GameStatus::InPlay)
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !self.is_in_play()
    }

    /// The final result, or `None` while the game continues.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self {
            GameStatus::InPlay => None,
            GameStatus::Won { winner, .. } => Some(GameResult::Winner(*winner)),
            GameStatus::Tied => Some(GameResult::Draw),
        }
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::win::{Direction, Position};

    fn line() -> WinningLine {
        WinningLine {
            direction: Direction::Vertical,
            cells: [
                Position::new(5, 0),
                Position::new(4, 0),
                Position::new(3, 0),
                Position::new(2, 0),
            ],
        }
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::SECOND);
        assert!(!result.is_winner(PlayerId::FIRST));
        assert!(result.is_winner(PlayerId::SECOND));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(PlayerId::FIRST));
        assert!(!draw.is_winner(PlayerId::SECOND));
    }

    #[test]
    fn test_status_results() {
        assert!(GameStatus::default().is_in_play());
        assert_eq!(GameStatus::InPlay.result(), None);
        assert_eq!(GameStatus::Tied.result(), Some(GameResult::Draw));

        let won = GameStatus::Won {
            winner: PlayerId::FIRST,
            line: line(),
        };
        assert!(won.is_terminal());
        assert_eq!(won.winner(), Some(PlayerId::FIRST));
        assert_eq!(won.result(), Some(GameResult::Winner(PlayerId::FIRST)));
        assert_eq!(GameStatus::Tied.winner(), None);
    }
}
