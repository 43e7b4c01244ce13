use crate::number::parse_number;
use crate::types::{ParseResult, Record};
use serde::Serialize;

/// Sum of one column over a set of records
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ColumnSummary {
    #[serde(rename = "SumColumn")]
    pub column: String,
    pub sum: f64,
    /// Cells that normalized to a number
    pub numeric_count: usize,
    /// Cells counted as zero (not a number, empty or absent)
    pub skipped_count: usize,
}

/// Sum a column. Cells that are not numbers add nothing.
pub fn sum(records: &[Record], column: &str) -> f64 {
    records
        .iter()
        .map(|r| parse_number(r.get(column)).or_zero())
        .sum()
}

/// Sum the last column of a parsed table, 0 when there are no headers.
pub fn sum_last_column(result: &ParseResult) -> f64 {
    match result.last_column() {
        Some(column) => sum(&result.rows, column),
        None => 0.0,
    }
}

/// Sum a column and count how many cells took part.
pub fn summarize_column(records: &[Record], column: &str) -> ColumnSummary {
    let mut summary = ColumnSummary {
        column: column.to_string(),
        sum: 0.0,
        numeric_count: 0,
        skipped_count: 0,
    };

    for record in records {
        match parse_number(record.get(column)).as_f64() {
            Some(n) => {
                summary.sum += n;
                summary.numeric_count += 1;
            }
            None => summary.skipped_count += 1,
        }
    }

    summary
}
