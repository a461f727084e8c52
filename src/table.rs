// src/table.rs
//! TableData: the renderable projection of a `FailureSummary`.
//!
//! One fixed header row plus one string row per summary record, in summary
//! order. The GUI table, clipboard copy and CSV/TSV export all read from it;
//! the workbook writer reads the summary directly so Count stays numeric.

use crate::config::consts::SUMMARY_HEADERS;
use crate::core::sanitize::one_line;
use crate::summary::FailureSummary;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableData {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn empty() -> Self {
        Self { headers: None, rows: Vec::new() }
    }

    pub fn from_summary(summary: &FailureSummary) -> Self {
        Self {
            headers: Some(summary_headers()),
            rows: summary.iter().map(|r| r.to_row()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ncols(&self) -> usize {
        self.headers
            .as_ref()
            .map(|h| h.len())
            .or_else(|| self.rows.first().map(|r| r.len()))
            .unwrap_or(0)
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// Cell text for on-screen display (line breaks folded).
    pub fn display_cell(&self, row: usize, col: usize) -> Option<String> {
        self.rows.get(row)?.get(col).map(|c| one_line(c))
    }
}

pub fn summary_headers() -> Vec<String> {
    SUMMARY_HEADERS.iter().map(|h| s!(*h)).collect()
}
