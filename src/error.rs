// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = ReportError> = std::result::Result<T, E>;

/// Everything that can abort a run.
///
/// Structural mismatches inside a report are *not* errors: the extractor
/// skips the offending heading or row and carries on.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The uploaded bytes are not text.
    #[error("report is not text: {0}")]
    Decode(String),

    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output path extension names no known export format.
    #[error("no export format for extension \".{0}\" (expected xlsx, csv or tsv)")]
    OutputFormat(String),

    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("spreadsheet archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("spreadsheet xml: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed workbook: {0}")]
    Workbook(String),
}
