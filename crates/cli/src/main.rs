//! Paceboard CLI - shared quarterly goal board.

mod config;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use paceboard_core::{DefaultSeed, Time};
use paceboard_progress::{
    recent, BasicProgressTracker, ProgressSnapshot, ProgressTracker, ProgressUpdate,
};
use paceboard_storage::JsonStorage;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::render::Style;

/// Entries shown in the board's activity section.
const FEED_LEN: usize = 10;

#[derive(Parser)]
#[command(name = "paceboard")]
#[command(about = "Shared quarterly goal pace board", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Tracker document (overrides the config file)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Disable colored user names
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the board (default)
    Board,
    /// Add progress to a goal
    Add {
        /// User name
        user: String,
        /// Goal name
        goal: String,
        /// Amount to add
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// What went well
        #[arg(long)]
        note: Option<String>,
    },
    /// Show recent activity
    Feed {
        /// Number of entries
        #[arg(long, default_value = "10")]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    let window = config.window()?;
    let data_file = cli.data.clone().unwrap_or_else(|| config.data_file.clone());

    let storage = match config.seed_state()? {
        Some(seed) => JsonStorage::new(&data_file, seed),
        None => JsonStorage::new(&data_file, DefaultSeed),
    };
    let mut tracker = BasicProgressTracker::new(storage);
    let state = tracker
        .load()
        .await
        .with_context(|| format!("Failed to load {}", tracker.storage().path().display()))?;

    let now = current_time(cli.today);
    let style = Style {
        color: !cli.no_color && std::io::stdout().is_terminal(),
    };

    match cli.command.unwrap_or(Commands::Board) {
        Commands::Board => {
            let snapshot = ProgressSnapshot::build(&state, &window, now.date(), FEED_LEN);
            print!("{}", render::board(&snapshot, &config, style));
        }
        Commands::Add { user, goal, amount, note } => {
            let mut update = ProgressUpdate::new(user, goal, amount);
            if let Some(note) = note {
                update = update.with_victory(note);
            }

            let next = tracker.record(&state, &update, now).await.with_context(|| {
                format!("Failed to record progress in {}", data_file.display())
            })?;
            if let Some(saved) = next.goal(&update.user, &update.goal) {
                info!(user = %update.user, goal = %update.goal, "progress saved");
                println!(
                    "Saved: {} / {} {} on '{}'",
                    saved.current, saved.target, saved.unit, update.goal
                );
            }
        }
        Commands::Feed { limit } => {
            print!("{}", render::feed(recent(&state.history, limit), &config, style));
        }
    }

    Ok(())
}

/// Local wall-clock time, moved to `today` when one is given.
fn current_time(today: Option<NaiveDate>) -> Time {
    let now = Local::now().naive_local();
    match today {
        Some(day) => day.and_time(now.time()),
        None => now,
    }
}
