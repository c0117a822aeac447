//! Web scraper module for basketball-reference.com
//!
//! Provides page fetching, HTML table parsing, and request pacing.

pub mod fetch;
pub mod parsers;
pub mod rate_limiter;

pub use fetch::{FetchOutcome, Fetcher};
pub use rate_limiter::RateLimiter;

/// Base URL for basketball-reference.com
pub const BASE_URL: &str = "https://www.basketball-reference.com";

/// Regular-season months, in chronological order
pub const SEASON_MONTHS: [&str; 7] = [
    "october", "november", "december", "january", "february", "march", "april",
];

/// Build per-game player stats URL for a season end year
pub fn per_game_url(year: u16) -> String {
    format!("{}/leagues/NBA_{}_per_game.html", BASE_URL, year)
}

/// Build schedule URL for one month of a season
///
/// All months use the season end year, including October-December.
pub fn schedule_url(year: u16, month: &str) -> String {
    format!("{}/leagues/NBA_{}_games-{}.html", BASE_URL, year, month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_game_url() {
        assert_eq!(
            per_game_url(2024),
            "https://www.basketball-reference.com/leagues/NBA_2024_per_game.html"
        );
    }

    #[test]
    fn test_schedule_url() {
        assert_eq!(
            schedule_url(2024, "october"),
            "https://www.basketball-reference.com/leagues/NBA_2024_games-october.html"
        );
    }

    #[test]
    fn test_season_months_ordered() {
        assert_eq!(SEASON_MONTHS[0], "october");
        assert_eq!(SEASON_MONTHS[6], "april");
        assert_eq!(SEASON_MONTHS.len(), 7);
    }
}
