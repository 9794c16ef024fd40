//! Computed metric values derived from artifacts
//!
//! Audits do not interpret traces themselves. They ask a [`MetricProvider`] for
//! a [`RawMetricValue`] and receive a [`ProviderResult`], which distinguishes a
//! found value, a metric that cannot be computed for the given trace, and an
//! outright failure.
//!
//! # Implementation Model
//!
//! Computing a metric from a trace can be expensive, and several audits may
//! need the same metric for the same page. [`ComputedMetricCache`] wraps any
//! provider and guarantees at-most-once computation per trace identity and run
//! settings: concurrent requesters share the single in-flight computation and
//! all receive the same outcome, failures included.
//!
//! [`FixedMetricProvider`] reports a value that was measured elsewhere, such as
//! a field measurement, and is what the command-line tool scores.

mod fixed_provider;
mod metric_cache;
mod provider;
mod provider_result;
mod raw_metric_value;

pub use fixed_provider::FixedMetricProvider;
pub use metric_cache::ComputedMetricCache;
pub use provider::MetricProvider;
pub use provider_result::ProviderResult;
pub use raw_metric_value::RawMetricValue;
