use super::{MetricProvider, ProviderResult, RawMetricValue};
use crate::artifacts::Trace;
use crate::audits::AuditContext;
use futures::FutureExt;
use futures::future::{self, BoxFuture};

/// A provider that reports a value measured elsewhere, whatever trace it is given.
#[derive(Debug, Clone)]
pub struct FixedMetricProvider {
    value: RawMetricValue,
}

impl FixedMetricProvider {
    #[must_use]
    pub const fn new(value: RawMetricValue) -> Self {
        Self { value }
    }
}

impl MetricProvider for FixedMetricProvider {
    fn request<'a>(&'a self, _trace: &'a Trace, _context: &'a AuditContext) -> BoxFuture<'a, ProviderResult<RawMetricValue>> {
        future::ready(ProviderResult::Found(self.value.clone())).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::TraceId;

    #[tokio::test]
    async fn test_reports_the_fixed_value() {
        let provider = FixedMetricProvider::new(RawMetricValue::new(0.2).with_explanation("field data"));
        let trace = Trace::new(TraceId::new("t"), Vec::new());

        let result = provider.request(&trace, &AuditContext::default()).await;
        let value = result.as_ref().unwrap();
        assert!((value.value - 0.2).abs() < f64::EPSILON);
        assert_eq!(value.explanation.as_deref(), Some("field data"));
    }
}
