//! Typed tabular data shared by both pipelines.
//!
//! A scraped table starts as raw text cells; the schema decides which
//! columns get numeric coercion. Coercion is permissive: a cell that
//! does not parse becomes `Missing`, never an error.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;

/// Per-game stats columns that carry numeric data.
pub const NUMERIC_STAT_COLUMNS: [&str; 25] = [
    "Age", "G", "GS", "MP", "FG", "FGA", "FG%", "3P", "3PA", "3P%", "2P", "2PA", "2P%", "FT",
    "FTA", "FT%", "ORB", "DRB", "TRB", "AST", "STL", "BLK", "TOV", "PF", "PTS",
];

/// One typed cell value.
///
/// `Missing` is an explicit "no data" marker, distinct from zero and
/// from empty text. It serializes as an empty CSV field.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Missing,
}

impl Value {
    /// Permissive numeric coercion.
    pub fn coerce_number(text: &str) -> Value {
        match text.trim().parse::<f64>() {
            Ok(n) => Value::Number(n),
            Err(_) => Value::Missing,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// CSV field rendering.
    pub fn to_field(&self) -> String {
        match self {
            Value::Number(n) => format_number(*n),
            Value::Text(t) => t.clone(),
            Value::Missing => String::new(),
        }
    }
}

/// Render integral values without a trailing `.0`.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Which columns of a page type carry numeric data; everything else
/// stays text. Column names come from the page's header row, so a
/// schema name that never appears simply coerces nothing.
#[derive(Debug, Clone, Default)]
pub struct ColumnSchema {
    numeric: HashSet<String>,
}

impl ColumnSchema {
    pub fn with_numeric(names: &[&str]) -> Self {
        Self {
            numeric: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    pub fn is_numeric(&self, name: &str) -> bool {
        self.numeric.contains(name)
    }
}

/// Schema for the per-game player stats table.
pub fn stat_schema() -> ColumnSchema {
    ColumnSchema::with_numeric(&NUMERIC_STAT_COLUMNS)
}

/// One scraped table: header names plus typed rows.
#[derive(Debug, Clone, Default)]
pub struct StatTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl StatTable {
    /// Build from raw text rows, coercing schema-numeric columns.
    ///
    /// Rows shorter than the header are padded with missing values so
    /// every record matches the header width.
    pub fn from_raw_rows(
        columns: Vec<String>,
        raw: Vec<Vec<String>>,
        schema: &ColumnSchema,
    ) -> Self {
        let numeric: Vec<bool> = columns.iter().map(|c| schema.is_numeric(c)).collect();
        let width = columns.len();

        let rows = raw
            .into_iter()
            .map(|cells| {
                let mut row: Vec<Value> = cells
                    .into_iter()
                    .take(width)
                    .enumerate()
                    .map(|(i, cell)| {
                        if numeric.get(i).copied().unwrap_or(false) {
                            Value::coerce_number(&cell)
                        } else {
                            Value::Text(cell)
                        }
                    })
                    .collect();
                row.resize(width, Value::Missing);
                row
            })
            .collect();

        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Write as CSV with one header row.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = csv::Writer::from_path(path.as_ref())?;
        writer.write_record(&self.columns)?;
        for row in &self.rows {
            writer.write_record(row.iter().map(Value::to_field))?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_rows(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(Value::coerce_number("30.1"), Value::Number(30.1));
        assert_eq!(Value::coerce_number(" 82 "), Value::Number(82.0));
        assert_eq!(Value::coerce_number(""), Value::Missing);
        assert_eq!(Value::coerce_number("Did Not Play"), Value::Missing);
    }

    #[test]
    fn test_numeric_column_never_keeps_text() {
        let columns = vec!["Player".to_string(), "PTS".to_string()];
        let schema = ColumnSchema::with_numeric(&["PTS"]);
        let table = StatTable::from_raw_rows(
            columns,
            text_rows(&[&["Luka Doncic", "33.9"], &["Inactive", "DNP"]]),
            &schema,
        );

        assert_eq!(table.rows[0][1], Value::Number(33.9));
        assert_eq!(table.rows[1][1], Value::Missing);
        // Text column untouched
        assert_eq!(table.rows[1][0], Value::Text("Inactive".to_string()));
    }

    #[test]
    fn test_short_rows_padded() {
        let columns = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let schema = ColumnSchema::default();
        let table = StatTable::from_raw_rows(columns, text_rows(&[&["x"]]), &schema);

        assert_eq!(table.rows[0].len(), 3);
        assert_eq!(table.rows[0][2], Value::Missing);
    }

    #[test]
    fn test_csv_round_trip_preserves_numbers() {
        let columns = vec!["Player".to_string(), "G".to_string(), "PTS".to_string()];
        let schema = ColumnSchema::with_numeric(&["G", "PTS"]);
        let table = StatTable::from_raw_rows(
            columns.clone(),
            text_rows(&[
                &["Nikola Jokic", "79", "26.4"],
                &["Joel Embiid", "39", "34.7"],
                &["Two-way player", "", "4.5"],
            ]),
            &schema,
        );

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.csv");
        table.write_csv(&path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, columns);

        let raw: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(String::from).collect())
            .collect();
        let reread = StatTable::from_raw_rows(columns, raw, &schema);

        assert_eq!(reread.len(), table.len());
        for (a, b) in table.rows.iter().zip(reread.rows.iter()) {
            assert_eq!(a[1].as_number(), b[1].as_number());
            assert_eq!(a[2].as_number(), b[2].as_number());
        }
        assert_eq!(reread.rows[2][1], Value::Missing);
    }
}
