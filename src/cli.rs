//! Command-line interface for fox_and_hounds.

use clap::{Parser, Subcommand};

/// Fox and Hounds - rule engine with isolated game rooms
#[derive(Parser, Debug)]
#[command(name = "fox_and_hounds")]
#[command(about = "Play Fox and Hounds in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a two-player game on this terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Print the rules
    Rules,
}
