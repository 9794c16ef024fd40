use super::{AuditContext, AuditError, AuditMeta, AuditResult};
use crate::artifacts::Artifacts;
use core::fmt::Debug;
use futures::future::BoxFuture;

/// A scoring rule that turns artifacts into an [`AuditResult`].
pub trait Audit: Send + Sync + Debug {
    /// Static description of the audit, read once at registration.
    fn meta(&self) -> &AuditMeta;

    /// Evaluate the audit.
    ///
    /// `artifacts` must contain every kind listed in [`AuditMeta::required_artifacts`].
    fn run<'a>(&'a self, artifacts: &'a Artifacts, context: &'a AuditContext) -> BoxFuture<'a, Result<AuditResult, AuditError>>;
}
