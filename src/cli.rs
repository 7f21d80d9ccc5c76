//! Command-line interface for strictly_cpu.

use clap::{Parser, Subcommand};

/// Strictly CPU - tic-tac-toe against a greedy CPU opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_cpu")]
#[command(about = "Play tic-tac-toe against a greedy CPU", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal, one square per line
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Seed for the CPU's random fallback (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,

        /// Print snapshots as JSON lines instead of a text board
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },
}
