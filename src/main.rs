//! bref-scrape
//!
//! CLI scraper for basketball-reference.com: per-game player statistics
//! and season schedules, exported as CSV.

mod cli;
mod config;
mod games;
mod scraper;
mod table;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bref_scrape=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::PlayerStats { year } => cli::run_player_stats(year).await,
        Commands::Games { year } => cli::run_games(year).await,
    }
}
