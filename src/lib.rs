//! perfscore crate
//!
//! Core library for the `perfscore` tool, which turns raw page-performance measurements
//! into normalized 0..1 quality scores suitable for aggregation into a report.
//!
//! # Module Organization
//!
//! - [`scoring`]: Log-normal scoring math and calibration
//! - [`artifacts`]: Raw inputs collected before audits run
//! - [`computed`]: Providers that derive raw metric values from artifacts, plus memoization
//! - [`i18n`]: Localized string lookup and number formatting
//! - [`audits`]: Audit contract, the built-in audits, and the registry that runs them
//! - [`config`]: Configuration file model
//! - [`reports`]: Console and JSON renderings of audit outcomes
//! - [`commands`]: Command-line interface

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod artifacts;
pub mod audits;
pub mod computed;
pub mod config;
pub mod i18n;
pub mod scoring;

#[doc(hidden)]
pub mod commands;

#[doc(hidden)]
pub mod reports;

pub use crate::commands::{Host, run};
