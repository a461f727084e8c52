// src/lib.rs
#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod csv;
pub mod file;
pub mod gui;
pub mod progress;
pub mod runner;
pub mod summary;
pub mod table;
pub mod xlsx;

pub use error::{ReportError, Result};
pub use runner::{extract_failures, Outcome};
pub use summary::{FailureSummary, FailureSummaryRecord, RawFailureRecord};
