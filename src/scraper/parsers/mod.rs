//! HTML table parsers for basketball-reference.com pages.
//!
//! Each page type gets its own parser; table location and the
//! row-validity rule are shared here.

pub mod player_stats;
pub mod schedule;

pub use player_stats::PlayerStatsParser;
pub use schedule::ScheduleParser;

use scraper::{ElementRef, Html, Selector};

/// Find a table by its `id` attribute.
///
/// Returns the first match. Absence is the caller's concern: log one
/// warning and produce an empty result.
pub fn find_table<'a>(document: &'a Html, id: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(&format!("table#{}", id)).ok()?;
    document.select(&selector).next()
}

/// Trimmed text content of one cell.
pub fn cell_text(cell: &ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Row-validity predicate used to drop non-data rows.
///
/// Header repeats and section dividers embedded mid-table come through
/// with fewer cells than real data rows, so a minimum cell count is the
/// detection rule. Kept separate from extraction so the rule can be
/// swapped without touching the row walk.
#[derive(Debug, Clone, Copy)]
pub struct RowFilter {
    min_cells: usize,
}

impl RowFilter {
    /// Keep rows with strictly more than `min_cells` cells.
    pub fn min_cells(min_cells: usize) -> Self {
        Self { min_cells }
    }

    pub fn accepts(&self, cells: &[String]) -> bool {
        cells.len() > self.min_cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_table_by_id() {
        let html = Html::parse_document(
            r#"<html><body>
            <table id="other"><tr><td>x</td></tr></table>
            <table id="schedule"><tr><td>y</td></tr></table>
            </body></html>"#,
        );
        assert!(find_table(&html, "schedule").is_some());
        assert!(find_table(&html, "per_game_stats").is_none());
    }

    #[test]
    fn test_row_filter_threshold_is_strict() {
        let filter = RowFilter::min_cells(8);
        let at_threshold: Vec<String> = (0..8).map(|i| i.to_string()).collect();
        let above: Vec<String> = (0..9).map(|i| i.to_string()).collect();

        assert!(!filter.accepts(&at_threshold));
        assert!(!filter.accepts(&[]));
        assert!(filter.accepts(&above));
    }
}
