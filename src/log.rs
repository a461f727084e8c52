// src/log.rs
//! Call-site logging macros backed by `tracing`.
//!
//! The GUI appends plain lines to `.store/debug.log`; the CLI writes to
//! stderr. Nothing is emitted until [`init`] installs a subscriber.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;

#[doc(hidden)]
pub use tracing;

/// Where log lines go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sink<'a> {
    File(&'a Path),
    Stderr,
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(sink: Sink<'_>, verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let res = match sink {
        Sink::File(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    let _ = fs::create_dir_all(parent);
                }
            }
            match OpenOptions::new().create(true).append(true).open(path) {
                Ok(file) => tracing_subscriber::fmt()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(false)
                    .with_max_level(level)
                    .try_init(),
                // No log file, no logging. The app itself still works.
                Err(_) => return,
            }
        }
        Sink::Stderr => tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_max_level(level)
            .try_init(),
    };
    let _ = res;
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::tracing::error!($($arg)*)
    };
}
