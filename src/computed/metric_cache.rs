use super::{MetricProvider, ProviderResult, RawMetricValue};
use crate::artifacts::{Trace, TraceId};
use crate::audits::{AuditContext, RunSettings};
use futures::future::BoxFuture;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::OnceCell;

const LOG_TARGET: &str = "     cache";

type CacheKey = (TraceId, RunSettings);
type Slot = Arc<OnceCell<ProviderResult<RawMetricValue>>>;

/// Memoizes a provider so each `(trace, run settings)` pair is computed at most once.
///
/// Concurrent requests for the same pair wait on the single in-flight computation and
/// all receive the same result. Failures are memoized as well, so a trace that cannot be
/// processed is not reprocessed for every audit that needs it. If the computing request
/// is dropped before completing, the next waiter takes over the computation.
#[derive(Debug)]
pub struct ComputedMetricCache<P> {
    name: &'static str,
    inner: P,
    slots: Mutex<HashMap<CacheKey, Slot>>,
}

impl<P: MetricProvider> ComputedMetricCache<P> {
    /// Wrap `inner`; `name` identifies the metric in log output.
    #[must_use]
    pub fn new(name: &'static str, inner: P) -> Self {
        Self {
            name,
            inner,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Number of memoized (or in-flight) computations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget every memoized computation.
    pub fn clear(&self) {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }

    fn slot(&self, key: CacheKey) -> Slot {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(slots.entry(key).or_default())
    }
}

impl<P: MetricProvider> MetricProvider for ComputedMetricCache<P> {
    fn request<'a>(&'a self, trace: &'a Trace, context: &'a AuditContext) -> BoxFuture<'a, ProviderResult<RawMetricValue>> {
        Box::pin(async move {
            let slot = self.slot((trace.id().clone(), context.settings().clone()));

            if let Some(result) = slot.get() {
                log::trace!(target: LOG_TARGET, "Cache hit for {} on trace '{}'", self.name, trace.id());
                return result.clone();
            }

            slot.get_or_init(|| async {
                log::debug!(target: LOG_TARGET, "Computing {} for trace '{}'", self.name, trace.id());
                self.inner.request(trace, context).await
            })
            .await
            .clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audits::FormFactor;
    use core::sync::atomic::{AtomicUsize, Ordering};
    use core::time::Duration;
    use futures::future::join_all;
    use ohno::app_err;

    #[derive(Debug, Default)]
    struct CountingProvider {
        calls: AtomicUsize,
        fail: bool,
    }

    impl MetricProvider for CountingProvider {
        fn request<'a>(&'a self, _trace: &'a Trace, _context: &'a AuditContext) -> BoxFuture<'a, ProviderResult<RawMetricValue>> {
            Box::pin(async move {
                let _ = self.calls.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(20)).await;

                if self.fail {
                    ProviderResult::Error(Arc::new(app_err!("trace missing required event")))
                } else {
                    ProviderResult::Found(RawMetricValue::new(0.05))
                }
            })
        }
    }

    fn trace(id: &str) -> Trace {
        Trace::new(TraceId::new(id), Vec::new())
    }

    #[tokio::test]
    async fn test_concurrent_requests_compute_once() {
        let cache = ComputedMetricCache::new("test metric", CountingProvider::default());
        let trace = trace("t1");
        let context = AuditContext::default();

        let results = join_all((0..10).map(|_| cache.request(&trace, &context))).await;

        assert_eq!(cache.inner.calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);
        for result in results {
            assert_eq!(result.as_ref(), Some(&RawMetricValue::new(0.05)));
        }
    }

    #[tokio::test]
    async fn test_sequential_requests_hit_cache() {
        let cache = ComputedMetricCache::new("test metric", CountingProvider::default());
        let trace = trace("t1");
        let context = AuditContext::default();

        let _ = cache.request(&trace, &context).await;
        let _ = cache.request(&trace, &context).await;

        assert_eq!(cache.inner.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_distinct_traces_and_settings_compute_separately() {
        let cache = ComputedMetricCache::new("test metric", CountingProvider::default());
        let mobile = AuditContext::default();
        let desktop = AuditContext::default().with_settings(RunSettings {
            form_factor: FormFactor::Desktop,
            ..RunSettings::default()
        });

        let _ = cache.request(&trace("t1"), &mobile).await;
        let _ = cache.request(&trace("t2"), &mobile).await;
        let _ = cache.request(&trace("t1"), &desktop).await;

        assert_eq!(cache.inner.calls.load(Ordering::SeqCst), 3);
        assert_eq!(cache.len(), 3);
    }

    #[tokio::test]
    async fn test_calibration_does_not_affect_key() {
        let cache = ComputedMetricCache::new("test metric", CountingProvider::default());
        let trace = trace("t1");
        let calibrated = AuditContext::default().with_calibration(crate::scoring::ScoreCalibration::new(0.2, 0.4).unwrap());

        let _ = cache.request(&trace, &AuditContext::default()).await;
        let _ = cache.request(&trace, &calibrated).await;

        assert_eq!(cache.inner.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failures_are_shared_unchanged() {
        let cache = ComputedMetricCache::new(
            "test metric",
            CountingProvider {
                fail: true,
                ..CountingProvider::default()
            },
        );
        let trace = trace("t1");
        let context = AuditContext::default();

        let first = cache.request(&trace, &context).await;
        let second = cache.request(&trace, &context).await;

        assert_eq!(cache.inner.calls.load(Ordering::SeqCst), 1);
        match (first, second) {
            (ProviderResult::Error(a), ProviderResult::Error(b)) => assert!(Arc::ptr_eq(&a, &b)),
            _ => panic!("Expected Error"),
        }
    }

    #[tokio::test]
    async fn test_clear_forgets_results() {
        let cache = ComputedMetricCache::new("test metric", CountingProvider::default());
        let trace = trace("t1");
        let context = AuditContext::default();

        let _ = cache.request(&trace, &context).await;
        cache.clear();
        assert!(cache.is_empty());

        let _ = cache.request(&trace, &context).await;
        assert_eq!(cache.inner.calls.load(Ordering::SeqCst), 2);
    }
}
