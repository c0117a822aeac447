//! CLI commands for bref-scrape.
//!
//! Two pipelines: per-game player statistics for one season, and the
//! full season schedule assembled month by month.

use std::path::Path;

use clap::{Parser, Subcommand};
use tracing::{info, warn};

use crate::config::ScrapeConfig;
use crate::games;
use crate::scraper::parsers::{PlayerStatsParser, ScheduleParser};
use crate::scraper::{per_game_url, schedule_url, FetchOutcome, Fetcher, RateLimiter, SEASON_MONTHS};
use crate::table::StatTable;

#[derive(Parser)]
#[command(name = "bref-scrape")]
#[command(version, about = "Scrape basketball-reference.com stats and schedules to CSV", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scrape one season's per-game player statistics
    PlayerStats {
        /// Season end year (2024 for the 2023-2024 season)
        #[arg(short, long, default_value_t = 2024)]
        year: u16,
    },

    /// Scrape one season's games, month by month
    Games {
        /// Season end year (2024 for the 2023-2024 season)
        #[arg(short, long, default_value_t = 2024)]
        year: u16,
    },
}

/// Fetch and export one season's per-game player statistics.
pub async fn run_player_stats(year: u16) -> anyhow::Result<()> {
    let config = ScrapeConfig::load()?;
    let fetcher = Fetcher::new(&config.fetch)?;

    info!("Fetching player stats for the {}-{} season", year - 1, year);

    let table = match fetcher.fetch(&per_game_url(year)).await? {
        FetchOutcome::Page(html) => PlayerStatsParser::parse(&html)?,
        FetchOutcome::NoData => {
            warn!("No stats page for the {}-{} season", year - 1, year);
            StatTable::default()
        }
        FetchOutcome::Failed(status) => {
            warn!("Continuing with empty stats after failed fetch ({})", status);
            StatTable::default()
        }
    };

    if table.is_empty() {
        warn!("No player data scraped; nothing to write");
        return Ok(());
    }

    let filename = format!("nba_player_stats_{}_{}.csv", year - 1, year);
    let path = Path::new(&config.output.dir).join(&filename);
    table.write_csv(&path)?;

    info!("Saved {} player rows to {}", table.len(), path.display());
    info!("Columns: {}", table.columns.join(", "));
    Ok(())
}

/// Fetch and export one season's games with the derived winner column.
pub async fn run_games(year: u16) -> anyhow::Result<()> {
    let config = ScrapeConfig::load()?;
    let fetcher = Fetcher::new(&config.fetch)?;
    let pacer = RateLimiter::new(config.pacing.interval_secs, config.pacing.jitter_secs);

    let mut season = Vec::new();
    for month in SEASON_MONTHS {
        info!("Fetching games for {} {}", month, year);

        match fetcher.fetch(&schedule_url(year, month)).await? {
            FetchOutcome::Page(html) => {
                let monthly = ScheduleParser::parse(&html)?;
                info!("Parsed {} rows for {}", monthly.len(), month);
                season.extend(monthly);
            }
            // Months outside the season have no page; skip without error
            FetchOutcome::NoData => info!("No schedule page for {} {}", month, year),
            FetchOutcome::Failed(status) => {
                warn!("Skipping {} after failed fetch ({})", month, status)
            }
        }

        pacer.acquire().await;
    }

    let games = games::build_season(season);

    let filename = format!("nba_games_{}_{}.csv", year - 1, year);
    let path = Path::new(&config.output.dir).join(&filename);
    games::write_csv(&games, &path)?;

    info!("Saved {} games to {}", games.len(), path.display());
    Ok(())
}
