// src/runner.rs
use std::path::Path;

use crate::{
    Result, ReportError,
    core::Document,
    file::Artifact,
    progress::{Progress, Stage},
    specs,
    summary::{self, FailureSummary},
    table::TableData,
};

/// Result of one report run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing failed. Informational, no spreadsheet.
    NoFailures,
    /// At least one failing step.
    Extracted(FailureSummary),
}

impl Outcome {
    pub fn summary(&self) -> Option<&FailureSummary> {
        match self {
            Outcome::NoFailures => None,
            Outcome::Extracted(s) => Some(s),
        }
    }

    pub fn stage(&self) -> Stage {
        match self {
            Outcome::NoFailures => Stage::NoFailures,
            Outcome::Extracted(_) => Stage::Presented,
        }
    }

    /// Status line for the user.
    pub fn message(&self) -> String {
        match self {
            Outcome::NoFailures => s!("No failures found in the uploaded report."),
            Outcome::Extracted(s) => format!("Extracted {} unique failures.", s.len()),
        }
    }

    pub fn table(&self) -> Option<TableData> {
        self.summary().map(TableData::from_summary)
    }

    /// Downloadable workbook; `None` when there is nothing to export.
    pub fn artifact(&self) -> Option<Result<Artifact>> {
        self.summary().map(Artifact::xlsx)
    }
}

/// Pure pipeline core: document in, ordered summary out.
pub fn extract_failures(doc: &Document) -> FailureSummary {
    summary::aggregate(specs::canoe::extract_raw(doc))
}

/// Full run over uploaded bytes.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn process_report(
    bytes: &[u8],
    mut progress: Option<&mut dyn Progress>,
) -> Result<Outcome> {
    let mut step = |stage: Stage| {
        if let Some(p) = progress.as_deref_mut() {
            p.stage(stage);
        }
    };

    step(Stage::Idle);
    let doc = Document::parse(bytes)?;
    step(Stage::Parsed);

    let raw = specs::canoe::extract_raw(&doc);
    logf!("Run: {} failing row(s) extracted", raw.len());
    step(Stage::Extracted);

    let summary = summary::aggregate(raw);
    step(Stage::Aggregated);

    let outcome = if summary.is_empty() {
        Outcome::NoFailures
    } else {
        Outcome::Extracted(summary)
    };
    step(outcome.stage());

    let msg = outcome.message();
    logf!("Run: {}", msg);
    if let Some(p) = progress.as_deref_mut() {
        p.log(&msg);
    }
    Ok(outcome)
}

/// Same as [`process_report`], reading the report from disk first.
pub fn process_file(
    path: &Path,
    progress: Option<&mut dyn Progress>,
) -> Result<Outcome> {
    let bytes = std::fs::read(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    logf!("Run: read {} ({} bytes)", path.display(), bytes.len());
    process_report(&bytes, progress)
}
