//! Audits: named, described scoring rules and the registry that runs them
//!
//! An audit ties a metric provider to the shared scoring math and packages the
//! outcome for the report. Audits do not inherit from a common base; each one
//! implements the small [`Audit`] trait and calls the free functions in
//! [`crate::scoring`].
//!
//! # Implementation Model
//!
//! Every audit exposes static [`AuditMeta`] built once at construction: its id,
//! localized title and description, [`ScoringMode`](crate::scoring::ScoringMode),
//! required artifacts, and default calibration. Running an audit is a single
//! request/response step: select the trace, await the provider once, score the
//! value, and return an [`AuditResult`]. Failures surface as [`AuditError`];
//! an audit never substitutes a default score.
//!
//! The [`AuditRegistry`] composes audits, rejects duplicate ids, checks required
//! artifacts, applies per-audit calibration overrides, and runs all audits
//! concurrently. It records each audit's [`AuditOutcome`] so that one failing
//! audit does not prevent the others from reporting.

mod audit;
mod audit_context;
mod audit_error;
mod audit_meta;
mod audit_outcome;
mod audit_result;
mod cumulative_layout_shift;
mod registry;

pub use audit::Audit;
pub use audit_context::{AuditContext, FormFactor, RunSettings};
pub use audit_error::AuditError;
pub use audit_meta::AuditMeta;
pub use audit_outcome::{AuditOutcome, AuditRecord};
pub use audit_result::AuditResult;
pub use cumulative_layout_shift::CumulativeLayoutShift;
pub use registry::{AuditRegistry, RunOptions};
