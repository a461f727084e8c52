// src/specs/mod.rs
//! # Report “specs” module
//!
//! This module hosts the **report-specific extraction specifications**. Each
//! spec encodes *where the ground truth lives in the HTML* of one report
//! flavour and *how to extract it robustly*.
//!
//! ## What lives here
//! - **Pure HTML walking** over `core::dom` (no I/O, no GUI).
//! - **Selector choice**: heading classes, section labels, result-table classes.
//! - **Tolerant extraction**: a heading, section or table that is not where we
//!   expect it is skipped, never an error.
//!
//! ## What does **not** live here
//! - **Grouping/counting** (`summary::aggregate`).
//! - **Presentation or export** (`table`, `xlsx`, `file`).
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → runner::process_* → specs::canoe::extract_raw()
//!                              ↘  Vec<RawFailureRecord>
//!                    summary::aggregate → table / xlsx
//! ```
//!
//! ## Testing notes
//! - Specs are testable **offline** against inline or saved HTML.
pub mod canoe;
