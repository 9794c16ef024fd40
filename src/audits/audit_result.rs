use serde::Serialize;

/// The product of a successful audit run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    /// In `[0, 1]`, rounded to two decimals.
    pub score: Option<f64>,
    pub explanation: Option<String>,

    /// The raw measurement; never negative.
    pub numeric_value: f64,

    /// The raw measurement formatted for the run's locale.
    pub display_value: String,
}

impl AuditResult {
    #[must_use]
    pub const fn new(score: Option<f64>, explanation: Option<String>, numeric_value: f64, display_value: String) -> Self {
        Self {
            score,
            explanation,
            numeric_value,
            display_value,
        }
    }
}
