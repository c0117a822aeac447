//! Per-game player statistics parser.
//!
//! Parses the season averages table (`table#per_game_stats`). Column
//! names come from the page's own header row; which of them are numeric
//! is the fixed stats schema.

use anyhow::Result;
use scraper::{Html, Selector};
use tracing::warn;

use super::{cell_text, find_table, RowFilter};
use crate::table::{stat_schema, StatTable};

/// Header cells kept, at most.
const MAX_COLUMNS: usize = 30;
/// Data rows need strictly more cells than this to be kept.
const MIN_DATA_CELLS: usize = 20;

/// Parser for per-game stats pages
pub struct PlayerStatsParser;

impl PlayerStatsParser {
    /// Parse the stats page into a typed table.
    ///
    /// A missing table yields an empty table and one warning; it is not
    /// an error.
    pub fn parse(html: &str) -> Result<StatTable> {
        let document = Html::parse_document(html);

        let Some(table) = find_table(&document, "per_game_stats") else {
            warn!("Player stats table not found in page");
            return Ok(StatTable::default());
        };

        let row_selector = Selector::parse("tr").unwrap();
        let header_selector = Selector::parse("th").unwrap();
        let cell_selector = Selector::parse("th, td").unwrap();

        // Column names from the header row. basketball-reference puts
        // the long column name in aria-label; cell text is the fallback.
        let columns: Vec<String> = table
            .select(&row_selector)
            .next()
            .map(|header_row| {
                header_row
                    .select(&header_selector)
                    .take(MAX_COLUMNS)
                    .map(|th| {
                        th.value()
                            .attr("aria-label")
                            .map(str::to_string)
                            .unwrap_or_else(|| cell_text(&th))
                    })
                    .collect()
            })
            .unwrap_or_default();

        let filter = RowFilter::min_cells(MIN_DATA_CELLS);
        let mut raw_rows = Vec::new();

        for row in table.select(&row_selector).skip(1) {
            let mut cells: Vec<String> =
                row.select(&cell_selector).map(|c| cell_text(&c)).collect();
            if !filter.accepts(&cells) {
                continue;
            }
            cells.truncate(MAX_COLUMNS);
            raw_rows.push(cells);
        }

        Ok(StatTable::from_raw_rows(columns, raw_rows, &stat_schema()))
    }
}
