// src/core/mod.rs

pub mod charset;
pub mod dom;
pub mod sanitize;

pub use dom::{Document, Query};
