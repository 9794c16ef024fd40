//! Report generation for audit outcomes
//!
//! This module renders the [`AuditRecord`](crate::audits::AuditRecord)s produced
//! by a registry run for people and for programs.
//!
//! # Implementation Model
//!
//! Two generators are provided, each accessed through a `generate` function:
//! - **Console**: One line per audit, with the score colored by its
//!   [`Rating`](crate::scoring::Rating) when colors are enabled
//! - **JSON**: An `audits` object keyed by audit id, using the camelCase field
//!   names of the audit result
//!
//! Both write into a `core::fmt::Write`, so callers decide whether the text goes
//! to the terminal or to a file. Failed audits are rendered rather than skipped,
//! carrying their error message in place of a score.
//!
//! The console module also renders the audit catalog shown by `perfscore audits`.

mod common;
mod console;
mod json;

pub use console::generate as generate_console;
pub use console::generate_audit_list;
pub use json::generate as generate_json;
