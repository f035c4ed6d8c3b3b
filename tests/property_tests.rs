//! Property tests over arbitrary move sequences.

use connect_four::core::{DropError, GameConfig, Grid, PlayerId};
use connect_four::engine::GameEngine;
use connect_four::rules::{check_win, scan_for_win, Direction, GameStatus, Position};
use proptest::prelude::*;

fn occupied_cells(grid: &Grid) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for (r, row) in grid.rows().enumerate() {
        for (c, cell) in row.into_iter().enumerate() {
            if !cell.is_empty() {
                cells.push((r, c));
            }
        }
    }
    cells
}

proptest! {
    /// Every drop either changes exactly one cell from empty to occupied,
    /// or is rejected and changes nothing.
    #[test]
    fn prop_each_drop_changes_at_most_one_cell(columns in prop::collection::vec(0usize..9, 0..80)) {
        let mut game = GameEngine::new(GameConfig::default()).unwrap();

        for column in columns {
            let before = game.grid().clone();
            let before_player = game.current_player();
            let before_status = game.status();
            let was_full = column < 7 && game.is_column_full(column);

            match game.drop_piece(column) {
                Ok(placement) => {
                    prop_assert_eq!(game.grid().occupied_count(), before.occupied_count() + 1);
                    let after = occupied_cells(game.grid());
                    let prior = occupied_cells(&before);
                    let added: Vec<(usize, usize)> =
                        after.into_iter().filter(|c| !prior.contains(c)).collect();
                    let expected = (placement.position.row, placement.position.column);
                    prop_assert_eq!(added, vec![expected]);
                    prop_assert_eq!(placement.player, before_player);
                }
                Err(err) => {
                    prop_assert_eq!(game.grid(), &before);
                    prop_assert_eq!(game.current_player(), before_player);
                    prop_assert_eq!(game.status(), before_status);
                    match err {
                        DropError::GameAlreadyEnded => prop_assert!(before_status.is_terminal()),
                        DropError::InvalidColumn { .. } => prop_assert!(column >= 7),
                        DropError::ColumnFull { .. } => prop_assert!(was_full),
                    }
                }
            }
        }
    }

    /// A tie is only ever reported on a full board, and a win is reported
    /// exactly when the mover owns a complete line somewhere.
    #[test]
    fn prop_terminal_states_are_justified(columns in prop::collection::vec(0usize..7, 0..60)) {
        let mut game = GameEngine::new(GameConfig::default()).unwrap();

        for column in columns {
            let Ok(placement) = game.drop_piece(column) else { continue };
            let scanned = scan_for_win(game.grid(), placement.player);
            match placement.status {
                GameStatus::Tied => {
                    prop_assert!(game.grid().is_full());
                    prop_assert!(scanned.is_none());
                }
                GameStatus::Won { winner, line } => {
                    prop_assert_eq!(winner, placement.player);
                    prop_assert!(line.contains(placement.position));
                    prop_assert!(scanned.is_some());
                }
                GameStatus::InPlay => {
                    prop_assert!(scanned.is_none());
                    prop_assert!(!game.grid().is_full());
                }
            }
        }
    }

    /// A horizontal run is found from whichever of its cells is the anchor.
    #[test]
    fn prop_horizontal_detection_is_symmetric(start in 0usize..=3, row in 0usize..6, anchor in 0usize..4) {
        let mut grid = Grid::new(&GameConfig::default());
        for c in start..start + 4 {
            grid.occupy(row, c, PlayerId::SECOND);
        }

        let line = check_win(&grid, Position::new(row, start + anchor));
        prop_assert!(line.is_some());
        prop_assert_eq!(line.unwrap().direction, Direction::Horizontal);
    }
}
