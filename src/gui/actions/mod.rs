// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,export,extract,extract_dropped}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod extract; // src/gui/actions/extract.rs

pub use copy::copy;
pub use export::export;
pub use extract::{extract, extract_dropped};

use crate::{gui::app::App, summary::FailureSummary};

#[inline]
pub(super) fn current_summary(app: &App) -> Option<&FailureSummary> {
    app.outcome.as_ref().and_then(|o| o.summary())
}
