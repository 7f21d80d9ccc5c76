//! Strictly CPU - terminal driver
//!
//! Reads squares from stdin, forwards them to the session controller and
//! prints every published snapshot.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use strictly_cpu::{GameConfig, GameController, Position, Selection, Snapshot};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play { config, seed, json } => {
            let mut config = load_config(config)?;
            if seed.is_some() {
                config = config.with_seed(seed);
            }
            run_play(config, json).await
        }
        Command::Config { config } => {
            let config = load_config(config)?;
            print!("{}", toml::to_string(&config)?);
            Ok(())
        }
    }
}

/// Loads the config file if given, defaults otherwise.
fn load_config(path: Option<PathBuf>) -> Result<GameConfig> {
    Ok(match path {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    })
}

/// Runs an interactive session until stdin closes or the user quits.
#[instrument]
async fn run_play(config: GameConfig, json: bool) -> Result<()> {
    info!("Starting terminal session");
    let controller = GameController::spawn(config);

    let mut updates = controller.subscribe();
    let printer = tokio::spawn(async move {
        let first = updates.borrow_and_update().clone();
        print_snapshot(&first, json);
        while updates.changed().await.is_ok() {
            let snapshot = updates.borrow_and_update().clone();
            print_snapshot(&snapshot, json);
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "q" | "quit" => break,
            "r" | "reset" => controller.force_reset().await?,
            input => match Position::from_label_or_number(input) {
                Some(pos) => {
                    let selection = controller.select_cell(pos.to_index()).await?;
                    if let Selection::Ignored(reason) = selection {
                        println!("{}", reason);
                    }
                }
                None => println!("Enter a square 1-9, 'r' to reset or 'q' to quit"),
            },
        }
    }

    printer.abort();
    info!(scores = ?controller.snapshot().scores, "Session finished");
    Ok(())
}

fn print_snapshot(snapshot: &Snapshot, json: bool) {
    if json {
        match serde_json::to_string(snapshot) {
            Ok(line) => println!("{}", line),
            Err(e) => error!(error = %e, "Failed to encode snapshot"),
        }
        return;
    }

    let scores = snapshot.scores;
    println!(
        "\n{}\n\n{}  (you {}, cpu {}, draws {})",
        snapshot.board,
        snapshot.status_message(),
        scores.player_wins,
        scores.opponent_wins,
        scores.draws
    );
    if let Some(line) = snapshot.winning_line {
        let [a, b, c] = line.positions();
        println!("line: {}, {}, {}", a, b, c);
    }
}
