//! Season game aggregation and export.
//!
//! Concatenates monthly schedule rows in fetch order, types the score
//! and date columns, drops games without a final score, and derives the
//! winner of each game.

use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

use crate::scraper::parsers::schedule::RawGame;
use crate::table::Value;

/// Date format used on schedule pages, e.g. "Tue, Oct 24, 2023".
const DATE_FORMAT: &str = "%a, %b %d, %Y";

/// CSV column order for the games file.
const GAME_COLUMNS: [&str; 8] = [
    "Date",
    "Visitor",
    "PTS_Visitor",
    "PTS_Home",
    "Home",
    "Box_Score",
    "OT",
    "Winner",
];

/// One completed game with typed scores and the derived winner.
#[derive(Debug, Clone, Serialize)]
pub struct Game {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Visitor")]
    pub visitor: String,
    #[serde(rename = "PTS_Visitor")]
    pub visitor_pts: f64,
    #[serde(rename = "PTS_Home")]
    pub home_pts: f64,
    #[serde(rename = "Home")]
    pub home: String,
    #[serde(rename = "Box_Score")]
    pub box_score: String,
    #[serde(rename = "OT")]
    pub overtime: String,
    #[serde(rename = "Winner")]
    pub winner: String,
}

/// Type and filter one season of raw schedule rows.
///
/// Input order is preserved; months arrive chronologically and are not
/// re-sorted. Rows missing either final score are dropped.
pub fn build_season(raw: Vec<RawGame>) -> Vec<Game> {
    let mut games = Vec::new();

    for row in raw {
        let (Some(visitor_pts), Some(home_pts)) = (
            Value::coerce_number(&row.visitor_pts).as_number(),
            Value::coerce_number(&row.home_pts).as_number(),
        ) else {
            continue;
        };

        let Ok(date) = NaiveDate::parse_from_str(&row.date, DATE_FORMAT) else {
            warn!("Skipping game with unparseable date: {}", row.date);
            continue;
        };

        let winner = winner(&row.visitor, visitor_pts, &row.home, home_pts);

        games.push(Game {
            date,
            visitor: row.visitor,
            visitor_pts,
            home_pts,
            home: row.home,
            box_score: row.box_score,
            overtime: row.overtime,
            winner,
        });
    }

    games
}

/// Derive the winner: the visitor only on a strictly greater score.
///
/// Completed games cannot tie, so the equal-score branch is a
/// deterministic fallback to the home team, not a modeled rule.
fn winner(visitor: &str, visitor_pts: f64, home: &str, home_pts: f64) -> String {
    if visitor_pts > home_pts {
        visitor.to_string()
    } else {
        home.to_string()
    }
}

/// Write the season as one CSV file.
pub fn write_csv<P: AsRef<Path>>(games: &[Game], path: P) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;

    if games.is_empty() {
        // serialize() emits the header with the first record; an empty
        // season still gets a header-only file
        writer.write_record(GAME_COLUMNS)?;
    }
    for game in games {
        writer.serialize(game)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_game(date: &str, visitor: &str, v_pts: &str, home: &str, h_pts: &str) -> RawGame {
        RawGame {
            date: date.to_string(),
            visitor: visitor.to_string(),
            visitor_pts: v_pts.to_string(),
            home: home.to_string(),
            home_pts: h_pts.to_string(),
            box_score: String::new(),
            overtime: String::new(),
        }
    }

    #[test]
    fn test_winner_is_visitor_on_higher_score() {
        let games = build_season(vec![raw_game(
            "Tue, Oct 24, 2023",
            "Golden State Warriors",
            "110",
            "Phoenix Suns",
            "105",
        )]);
        assert_eq!(games[0].winner, "Golden State Warriors");
    }

    #[test]
    fn test_tie_falls_to_home_team() {
        let games = build_season(vec![raw_game(
            "Tue, Oct 24, 2023",
            "Golden State Warriors",
            "100",
            "Phoenix Suns",
            "100",
        )]);
        assert_eq!(games[0].winner, "Phoenix Suns");
    }

    #[test]
    fn test_games_without_scores_dropped() {
        let games = build_season(vec![
            raw_game("Tue, Oct 24, 2023", "Lakers", "107", "Nuggets", "119"),
            raw_game("Thu, Apr 25, 2024", "Suns", "", "Timberwolves", ""),
            raw_game("Fri, Apr 26, 2024", "Knicks", "104", "76ers", ""),
        ]);
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].winner, "Nuggets");
    }

    #[test]
    fn test_dates_parsed() {
        let games = build_season(vec![raw_game(
            "Sat, Feb 3, 2024",
            "Lakers",
            "107",
            "Knicks",
            "113",
        )]);
        assert_eq!(games[0].date, NaiveDate::from_ymd_opt(2024, 2, 3).unwrap());
    }

    #[test]
    fn test_monthly_concatenation_preserves_order() {
        // One month with games, one month that returned no data and so
        // contributes nothing
        let october = vec![
            raw_game("Tue, Oct 24, 2023", "Lakers", "107", "Nuggets", "119"),
            raw_game("Wed, Oct 25, 2023", "Celtics", "108", "Knicks", "104"),
        ];
        let november: Vec<RawGame> = Vec::new();

        let mut season = Vec::new();
        season.extend(october);
        season.extend(november);

        let games = build_season(season);
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].visitor, "Lakers");
        assert_eq!(games[1].visitor, "Celtics");
        assert!(games[0].date < games[1].date);
    }

    #[test]
    fn test_csv_header_and_rows() {
        let games = build_season(vec![raw_game(
            "Tue, Oct 24, 2023",
            "Lakers",
            "107",
            "Nuggets",
            "119",
        )]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.csv");
        write_csv(&games, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Date,Visitor,PTS_Visitor,PTS_Home,Home,Box_Score,OT,Winner"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("2023-10-24,Lakers,107"));
        assert!(row.ends_with("Nuggets"));
    }

    #[test]
    fn test_empty_season_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.csv");
        write_csv(&[], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
    }
}
