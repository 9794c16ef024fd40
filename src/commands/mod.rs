//! Command-line interface and orchestration for perfscore
//!
//! This module implements the CLI commands and wires the library modules
//! together: it parses arguments, loads configuration and message catalogs,
//! builds the audit registry, runs it, and renders reports.
//!
//! # Implementation Model
//!
//! ## Commands
//!
//! - **score**: Score a pre-measured cumulative layout shift value through the
//!   full audit pipeline and render the result to the console and/or JSON
//! - **audits**: List the registered audits and their metadata
//! - **init**: Generate a default configuration file
//! - **validate**: Check that the configuration file parses and that its
//!   calibration overrides apply to registered audits
//!
//! ## Execution Flow
//!
//! The `run` function parses command-line arguments using clap and routes to
//! the appropriate command handler. Commands that need configuration build a
//! `Common` first, which initializes logging, loads the configuration and
//! message catalog, and constructs the registry.
//!
//! All output goes through the [`Host`] trait so commands can be driven from
//! tests without touching the real process.

mod audits;
mod common;
mod host;
mod init;
mod run;
mod score;
mod validate;

pub use audits::list_audits;
pub use common::{ColorMode, GlobalArgs, LogLevel};
pub use host::Host;
#[cfg(test)]
pub use host::TestHost;
pub use init::{InitArgs, init_config};
pub use run::run;
pub use score::{ScoreArgs, process_score};
pub use validate::validate_config;
