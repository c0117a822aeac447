//! Month schedule parser.
//!
//! Parses one month's schedule table (`table#schedule`) into raw game
//! rows. Typing, filtering and the winner derivation happen in the
//! games module.

use anyhow::Result;
use scraper::{Html, Selector};
use tracing::warn;

use super::{cell_text, find_table, RowFilter};

/// Data cells (`td`) a game row must exceed to be kept.
const MIN_DATA_CELLS: usize = 8;

/// One schedule row, all cells still text.
#[derive(Debug, Clone, PartialEq)]
pub struct RawGame {
    pub date: String,
    pub visitor: String,
    pub visitor_pts: String,
    pub home: String,
    pub home_pts: String,
    /// Box-score link href, empty when the cell has no anchor
    pub box_score: String,
    pub overtime: String,
}

/// Parser for schedule pages
pub struct ScheduleParser;

impl ScheduleParser {
    /// Parse one schedule page.
    ///
    /// A missing table yields an empty list and one warning; it is not
    /// an error.
    pub fn parse(html: &str) -> Result<Vec<RawGame>> {
        let document = Html::parse_document(html);

        let Some(table) = find_table(&document, "schedule") else {
            warn!("Schedule table not found in page");
            return Ok(Vec::new());
        };

        let row_selector = Selector::parse("tr").unwrap();
        let th_selector = Selector::parse("th").unwrap();
        let td_selector = Selector::parse("td").unwrap();
        let link_selector = Selector::parse("a").unwrap();

        let filter = RowFilter::min_cells(MIN_DATA_CELLS);
        let mut games = Vec::new();

        for row in table.select(&row_selector).skip(1) {
            // Game rows carry the date in a row-header cell
            let Some(date_cell) = row.select(&th_selector).next() else {
                continue;
            };

            let cells: Vec<String> = row.select(&td_selector).map(|c| cell_text(&c)).collect();
            if !filter.accepts(&cells) {
                continue;
            }

            let box_score = row
                .select(&td_selector)
                .nth(5)
                .and_then(|cell| cell.select(&link_selector).next())
                .and_then(|a| a.value().attr("href"))
                .unwrap_or("")
                .to_string();

            games.push(RawGame {
                date: cell_text(&date_cell),
                visitor: cells[1].clone(),
                visitor_pts: cells[2].clone(),
                home: cells[3].clone(),
                home_pts: cells[4].clone(),
                box_score,
                overtime: cells[6].clone(),
            });
        }

        Ok(games)
    }
}
