//! Terminal front end.
//!
//! Reads commands from stdin: a column number (1-based) drops a piece,
//! `n` starts a new game once the current one is over, `q` quits.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use connect_four::{
    render_board, Color, GameConfig, PlayerId, Session, SessionError, SessionPhase, TextRenderer,
};

/// Two-player Connect Four in the terminal.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Player 1 piece color (#rrggbb).
    #[arg(long, default_value_t = Color::PURPLE)]
    p1_color: Color,

    /// Player 2 piece color (#rrggbb).
    #[arg(long, default_value_t = Color::TEAL)]
    p2_color: Color,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, default_value = "warn")]
    log_level: Level,
}

enum Command {
    Drop(usize),
    NewGame,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim() {
        "q" | "quit" => Some(Command::Quit),
        "n" | "new" => Some(Command::NewGame),
        other => other
            .parse::<usize>()
            .ok()
            .filter(|&c| c >= 1)
            .map(|c| Command::Drop(c - 1)),
    }
}

fn print_board(session: &Session) {
    if let Some(engine) = session.engine() {
        print!("\n{}", render_board(engine.grid(), session.players()));
    }
}

fn print_scores(session: &Session) {
    let board = session.scoreboard();
    for (id, player) in session.players().iter() {
        println!("{} score: {}", player.name, board.scores[id]);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;

    let mut session = Session::new(GameConfig::default())?;
    session.set_color(PlayerId::FIRST, args.p1_color)?;
    session.set_color(PlayerId::SECOND, args.p2_color)?;
    session.subscribe(TextRenderer::new(session.players(), io::stdout()));

    session.start_game()?;
    print_board(&session);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        match session.phase() {
            SessionPhase::InPlay => print!("column (1-{}), q to quit> ", session.config().width),
            _ => print!("n for a new game, q to quit> "),
        }
        io::stdout().flush().context("failed to flush stdout")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read stdin")?;

        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::NewGame) => match session.start_game() {
                Ok(()) => print_board(&session),
                Err(SessionError::GameInProgress) => println!("Finish this game first"),
                Err(err) => return Err(err.into()),
            },
            Some(Command::Drop(column)) => match session.drop_piece(column) {
                Ok(placement) => {
                    debug!(?placement, "drop accepted");
                    print_board(&session);
                    if placement.status.is_terminal() {
                        print_scores(&session);
                    }
                }
                // Full columns are already announced by the renderer.
                Err(SessionError::Drop(connect_four::DropError::ColumnFull { .. })) => {}
                Err(err) => println!("{}", err),
            },
            None => println!("Unrecognized input {:?}", line.trim()),
        }
    }

    Ok(())
}
