//! Report output: the append-only result log and the summary-table
//! renderer. Rendering returns plain text for the caller to display.

use crate::table::{Header, Row};
use std::fmt::Write;

/// Columns shown by the summary table, in display order.
pub const DISPLAY_COLUMNS: [&str; 8] = [
    "datacompleteness",
    "league",
    "split",
    "date",
    "patch",
    "gamelength",
    "kills",
    "deaths",
];

/// Ordered, append-only log of result lines. No size cap, no deduplication;
/// cleared only by an explicit [`clear`](ReportLog::clear).
#[derive(Debug, Default)]
pub struct ReportLog {
    lines: Vec<String>,
}

impl ReportLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Current snapshot, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

fn cell<'a>(row: &'a Row, idx: Option<usize>) -> &'a str {
    match idx.and_then(|i| row.get(i)) {
        Some(value) if !value.is_empty() => value.as_str(),
        _ => "-",
    }
}

/// Render `rows` as a fixed-projection text table over [`DISPLAY_COLUMNS`].
///
/// Cells that are missing or empty render as `-`; a column absent from the
/// header renders `-` down its whole length.
pub fn render_summary_table(header: &Header, rows: &[Row]) -> String {
    let indices: Vec<Option<usize>> = DISPLAY_COLUMNS
        .iter()
        .map(|name| header.index_of(name))
        .collect();

    let mut widths: Vec<usize> = DISPLAY_COLUMNS.iter().map(|name| name.len()).collect();
    for row in rows {
        for (i, idx) in indices.iter().enumerate() {
            widths[i] = widths[i].max(cell(row, *idx).len());
        }
    }

    let mut out = String::new();
    for (i, name) in DISPLAY_COLUMNS.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        let _ = write!(out, "{:<width$}", name, width = widths[i]);
    }
    out.push('\n');

    for row in rows {
        for (i, idx) in indices.iter().enumerate() {
            if i > 0 {
                out.push_str("  ");
            }
            let _ = write!(out, "{:<width$}", cell(row, *idx), width = widths[i]);
        }
        out.push('\n');
    }

    out
}
