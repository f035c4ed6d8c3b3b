//! Text rendering for terminals.
//!
//! [`render_board`] draws a grid snapshot with each piece in its owner's
//! color. [`TextRenderer`] is an observer that narrates events as plain
//! lines of text.

use colored::Colorize;
use std::io::Write;
use tracing::warn;

use crate::core::{Cell, Grid, Player, PlayerMap};
use crate::engine::{GameEvent, GameObserver};

const PIECE: &str = "●";
const EMPTY: &str = "·";
const FULL_MARK: &str = "#";

/// Draw the board.
///
/// The first line labels columns 1..=W for human input; a full column is
/// marked with `#` instead of its number. Rows follow top to bottom.
#[must_use]
pub fn render_board(grid: &Grid, players: &PlayerMap<Player>) -> String {
    let mut out = String::new();

    for column in 0..grid.width() {
        let label = if grid.is_column_full(column) {
            FULL_MARK.dimmed().to_string()
        } else {
            ((column + 1) % 10).to_string()
        };
        out.push_str(&format!("{} ", label));
    }
    out.push('\n');

    for row in grid.rows() {
        for cell in row {
            let glyph = match cell {
                Cell::Empty => EMPTY.bright_black(),
                Cell::Occupied(id) => {
                    let c = players[id].color;
                    PIECE.truecolor(c.r, c.g, c.b)
                }
            };
            out.push_str(&format!("{} ", glyph));
        }
        out.push('\n');
    }

    out
}

/// A one-line description of an event, using the players' names.
#[must_use]
pub fn describe(event: &GameEvent, names: &PlayerMap<String>) -> String {
    match event {
        GameEvent::GameStarted {
            height,
            width,
            first,
        } => format!("New {}x{} game, {} moves first", height, width, names[*first]),
        GameEvent::PiecePlaced { column, player, .. } => {
            format!("{} dropped into column {}", names[*player], column + 1)
        }
        GameEvent::TurnChanged { player } => format!("{}'s turn", names[*player]),
        GameEvent::ColumnFull { column } => format!("Column {} is full", column + 1),
        GameEvent::GameWon { player, .. } => format!("{} won!", names[*player]),
        GameEvent::GameTied => {
            let mut iter = names.iter().map(|(_, n)| n.as_str());
            let first = iter.next().unwrap_or_default();
            let second = iter.next().unwrap_or_default();
            format!("{} and {} tie!", first, second)
        }
        GameEvent::ScoreUpdated { player, score } => {
            format!("{} score: {}", names[*player], score)
        }
    }
}

/// Writes a line per event to `out`.
pub struct TextRenderer<W: Write> {
    names: PlayerMap<String>,
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(players: &PlayerMap<Player>, out: W) -> Self {
        Self {
            names: PlayerMap::new(|id| players[id].name.clone()),
            out,
        }
    }

    /// Consume the renderer and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GameObserver for TextRenderer<W> {
    fn on_event(&mut self, event: &GameEvent) {
        let line = describe(event, &self.names);
        if let Err(err) = writeln!(self.out, "{}", line) {
            warn!(%err, "failed to write event");
        }
    }
}
