//! Raw inputs collected before any audit runs
//!
//! Artifacts are gathered once per page load and handed to every audit as
//! read-only input. Each audit declares the [`ArtifactKind`]s it needs, and the
//! registry refuses to run an audit whose inputs are absent.
//!
//! Traces and devtools logs are keyed by the name of the pass that produced
//! them; metric audits read the [`DEFAULT_PASS`]. Interpreting trace events is
//! the job of the providers in [`crate::computed`], so the types here are
//! opaque, cheaply-cloneable handles.

mod artifact_kind;
mod artifact_set;
mod devtools_log;
mod trace;

pub use artifact_kind::ArtifactKind;
pub use artifact_set::{Artifacts, DEFAULT_PASS};
pub use devtools_log::DevtoolsLog;
pub use trace::{Trace, TraceId};
