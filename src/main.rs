//! Fox and Hounds - terminal front end
//!
//! Plays a one-device game through the room registry.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use fox_and_hounds::{AppConfig, GameSnapshot, Input, Position, RULES, RoomRegistry, Side};
use std::io::{BufRead, Write};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => {
            let config = match config {
                Some(path) => AppConfig::from_file(path)?,
                None => AppConfig::default(),
            };
            init_tracing(&config);
            run_local_game(&config)
        }
        Command::Rules => {
            println!("{}", RULES);
            Ok(())
        }
    }
}

fn init_tracing(config: &AppConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// One parsed line of terminal input.
enum Entry {
    Click(Position),
    Reset,
    Moves,
    Quit,
}

fn parse_line(line: &str) -> Result<Entry> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        ["reset"] => Ok(Entry::Reset),
        ["moves"] => Ok(Entry::Moves),
        ["quit"] | ["q"] => Ok(Entry::Quit),
        [row, col] => Ok(Entry::Click(Position::parse(row, col)?)),
        _ => anyhow::bail!("Expected `<row> <col>`, `moves`, `reset` or `quit`"),
    }
}

/// Runs a room where one terminal plays both sides.
#[instrument(skip(config))]
fn run_local_game(config: &AppConfig) -> Result<()> {
    let registry = RoomRegistry::new();
    let room_id = registry.create_local_room("terminal".to_string());
    info!(%room_id, "Starting local game");

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let mut snapshot = registry.snapshot(&room_id)?;

    loop {
        print_board(&registry, &room_id, config, &snapshot)?;
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let command = match parse_line(&line?) {
            Ok(command) => command,
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };

        // Both sides belong to this terminal, so input always comes from the side to move.
        let side = snapshot.turn;
        let result = match command {
            Entry::Quit => return Ok(()),
            Entry::Reset => registry.submit_input(&room_id, side, Input::Reset),
            Entry::Click(pos) => registry.submit_input(&room_id, side, Input::Square(pos)),
            Entry::Moves => {
                let room = registry.get_room(&room_id)?;
                for mv in room.game().state().legal_moves() {
                    println!("  {}", mv);
                }
                continue;
            }
        };
        match result {
            Ok(next) => snapshot = next,
            Err(err) => {
                warn!(%err, "Input rejected");
                println!("{}", err);
            }
        }
    }
}

fn print_board(
    registry: &RoomRegistry,
    room_id: &str,
    config: &AppConfig,
    snapshot: &GameSnapshot,
) -> Result<()> {
    let room = registry.get_room(room_id)?;
    println!();
    println!(
        "{}",
        room.game()
            .state()
            .render(*config.fox_glyph(), *config.hound_glyph())
    );
    match (snapshot.winner, snapshot.end_reason) {
        (Some(winner), Some(reason)) => {
            println!("Game over: {} ({}). Type `reset` to play again.", side_name(winner), reason)
        }
        _ => match snapshot.selection {
            Some(selection) => println!(
                "{} to move, holding the {} at {}",
                side_name(snapshot.turn),
                selection.piece,
                selection.at
            ),
            None => println!("{} to move", side_name(snapshot.turn)),
        },
    }
    Ok(())
}

fn side_name(side: Side) -> &'static str {
    match side {
        Side::Fox => "Fox",
        Side::Hounds => "Hounds",
    }
}
