use serde::{Deserialize, Serialize};

/// A raw metric measurement, as produced by a [`MetricProvider`](super::MetricProvider).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMetricValue {
    pub value: f64,

    /// Human-readable context about how the value was obtained, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl RawMetricValue {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self { value, explanation: None }
    }

    #[must_use]
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }
}
