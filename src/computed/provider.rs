use super::{ProviderResult, RawMetricValue};
use crate::artifacts::Trace;
use crate::audits::AuditContext;
use core::fmt::Debug;
use futures::future::BoxFuture;
use std::sync::Arc;

/// Supplies a raw metric value for a trace.
///
/// Implementations may be expensive; wrap them in a
/// [`ComputedMetricCache`](super::ComputedMetricCache) to compute each value at most once.
pub trait MetricProvider: Send + Sync + Debug {
    /// Compute the metric for `trace` under the run settings in `context`.
    fn request<'a>(&'a self, trace: &'a Trace, context: &'a AuditContext) -> BoxFuture<'a, ProviderResult<RawMetricValue>>;
}

impl<P: MetricProvider + ?Sized> MetricProvider for Arc<P> {
    fn request<'a>(&'a self, trace: &'a Trace, context: &'a AuditContext) -> BoxFuture<'a, ProviderResult<RawMetricValue>> {
        (**self).request(trace, context)
    }
}
