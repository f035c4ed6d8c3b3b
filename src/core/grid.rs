//! Board occupancy.
//!
//! Row 0 is the top of the board and row `height - 1` the bottom, so a
//! dropped piece lands on the highest free row index in its column.
//!
//! Cells live in a row-major `im::Vector`: cloning a grid (for snapshots
//! handed to renderers) shares structure instead of copying every cell.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::error::ConfigError;
use super::player::PlayerId;

/// A single board position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(PlayerId),
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The occupying player, if any.
    #[must_use]
    pub fn player(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(p) => Some(p),
        }
    }
}

/// An H×W grid of cells.
///
/// Deserialized grids are checked like fresh ones: dimensions must be
/// valid, `cells` must cover the board, and the occupied count is
/// recomputed from the cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vector<Cell>,
    occupied: usize,
}

#[derive(Deserialize)]
struct RawGrid {
    height: usize,
    width: usize,
    cells: Vector<Cell>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = ConfigError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        let config = GameConfig::new(raw.height, raw.width)?;
        if raw.cells.len() != config.cell_count() {
            return Err(ConfigError::CellCount {
                expected: config.cell_count(),
                found: raw.cells.len(),
            });
        }
        let occupied = raw.cells.iter().filter(|c| !c.is_empty()).count();
        Ok(Self {
            height: config.height,
            width: config.width,
            cells: raw.cells,
            occupied,
        })
    }
}

impl Grid {
    /// Create an empty grid with the configured dimensions.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            height: config.height,
            width: config.width,
            cells: std::iter::repeat(Cell::Empty)
                .take(config.cell_count())
                .collect(),
            occupied: 0,
        }
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Check signed coordinates against the board bounds.
    #[must_use]
    pub fn in_bounds(&self, row: isize, column: isize) -> bool {
        row >= 0 && column >= 0 && (row as usize) < self.height && (column as usize) < self.width
    }

    /// Get a cell. Out-of-bounds coordinates read as `None`.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        if row < self.height && column < self.width {
            self.cells.get(row * self.width + column).copied()
        } else {
            None
        }
    }

    /// The lowest empty row in `column`, scanning bottom to top.
    ///
    /// Returns `None` if the column is full or out of range.
    #[must_use]
    pub fn find_spot(&self, column: usize) -> Option<usize> {
        if column >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&row| self.cells[row * self.width + column].is_empty())
    }

    /// Check if every cell of `column` is occupied.
    #[must_use]
    pub fn is_column_full(&self, column: usize) -> bool {
        column < self.width && self.find_spot(column).is_none()
    }

    /// Claim an empty cell for `player`.
    ///
    /// Occupied cells are never overwritten; returns false if the cell was
    /// taken or out of range.
    pub fn occupy(&mut self, row: usize, column: usize, player: PlayerId) -> bool {
        match self.get(row, column) {
            Some(Cell::Empty) => {
                self.cells.set(row * self.width + column, Cell::Occupied(player));
                self.occupied += 1;
                true
            }
            _ => false,
        }
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    /// Check if every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied == self.height * self.width
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = Vec<Cell>> + '_ {
        (0..self.height).map(move |row| {
            let start = row * self.width;
            self.cells.iter().skip(start).take(self.width).copied().collect()
        })
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for cell in row {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::Occupied(p) if p == PlayerId::FIRST => 'X',
                    Cell::Occupied(_) => 'O',
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
