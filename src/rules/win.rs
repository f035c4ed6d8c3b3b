//! Four-in-a-row detection.
//!
//! ## Anchored check
//!
//! After a placement only lines through the new piece can have changed, so
//! [`check_win`] looks at the windows of [`CONNECT`] cells that contain the
//! anchor on each of the four axes. For every axis the window ending at the
//! anchor is checked first, followed by the windows that extend past it.
//! Which end of a run was placed last doesn't matter.
//!
//! ## Full scan
//!
//! [`scan_for_win`] walks every cell of the board and tries each axis from
//! it. It is slower and exists to cross-check the anchored version.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Grid, PlayerId, CONNECT};

/// A board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// The four axes a line can lie on.
///
/// Each axis has a step pointing away from the anchor: left, up, up-right
/// and up-left. Rows grow downward, so "up" is a negative row step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Rising to the right: `/`.
    DiagonalRight,
    /// Rising to the left: `\`.
    DiagonalLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalRight,
        Direction::DiagonalLeft,
    ];

    /// `(row, column)` step from one cell of a window to the next.
    #[must_use]
    pub const fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, -1),
            Direction::Vertical => (-1, 0),
            Direction::DiagonalRight => (-1, 1),
            Direction::DiagonalLeft => (-1, -1),
        }
    }
}

/// A completed four-in-a-row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    pub direction: Direction,
    /// The cells in window order.
    pub cells: [Position; CONNECT],
}

impl WinningLine {
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }
}

/// The window of `CONNECT` cells starting at `(row, column)` along `direction`.
///
/// Returns `None` unless every cell is on the board and held by `player`.
fn window(
    grid: &Grid,
    row: isize,
    column: isize,
    direction: Direction,
    player: PlayerId,
) -> Option<WinningLine> {
    let (dr, dc) = direction.step();
    let mut cells = [Position::new(0, 0); CONNECT];

    for (i, slot) in cells.iter_mut().enumerate() {
        let r = row + dr * i as isize;
        let c = column + dc * i as isize;
        if !grid.in_bounds(r, c) {
            return None;
        }
        let (r, c) = (r as usize, c as usize);
        if grid.get(r, c) != Some(Cell::Occupied(player)) {
            return None;
        }
        *slot = Position::new(r, c);
    }

    Some(WinningLine { direction, cells })
}

/// Check for a four-in-a-row through the piece at `anchor`.
///
/// The player is taken from the anchor cell; an empty or off-board anchor
/// never wins. Pure: the grid is not modified.
#[must_use]
pub fn check_win(grid: &Grid, anchor: Position) -> Option<WinningLine> {
    let player = grid.get(anchor.row, anchor.column)?.player()?;
    let (row, column) = (anchor.row as isize, anchor.column as isize);

    Direction::ALL.into_iter().find_map(|direction| {
        let (dr, dc) = direction.step();
        // Shift the window start back along the axis so the anchor takes
        // every position within it.
        (0..CONNECT as isize).find_map(|shift| {
            window(grid, row - dr * shift, column - dc * shift, direction, player)
        })
    })
}

/// Check every window on the board for a line held by `player`.
#[must_use]
pub fn scan_for_win(grid: &Grid, player: PlayerId) -> Option<WinningLine> {
    for row in (0..grid.height()).rev() {
        for column in (0..grid.width()).rev() {
            for direction in Direction::ALL {
                if let Some(line) = window(grid, row as isize, column as isize, direction, player) {
                    return Some(line);
                }
            }
        }
    }
    None
}

/// True iff every cell is occupied, whether or not anyone has won.
#[must_use]
pub fn check_tie(grid: &Grid) -> bool {
    grid.is_full()
}
