#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Reading and normalization of well completion report exports.
//!
//! Provides the streaming [`reader`] over the raw delimited export, the
//! [`normalize`] step that turns raw rows into compact records keyed by
//! region, and the never-failing field parsers in [`parsing`].
//!
//! This crate has no awareness of the output artifacts. It yields
//! `(region, WellRecord)` pairs that callers can aggregate however they
//! like.

pub mod normalize;
pub mod parsing;
pub mod progress;
pub mod reader;

/// Errors that can occur while reading the source export.
///
/// Field-level parse failures are not errors; they resolve to absent values
/// or row rejection inside [`normalize`].
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The export is structurally unusable (e.g. no header row).
    #[error("Parse error: {0}")]
    Parse(String),
}
