use std::sync::Arc;

/// The outcome of asking a provider for a metric.
#[derive(Debug, Clone)]
pub enum ProviderResult<T> {
    /// The metric was computed.
    Found(T),

    /// The metric is undefined for this input, for example because the trace lacks a required event.
    NotComputable(Arc<str>),

    /// An error occurred while computing the metric.
    Error(Arc<ohno::AppError>),
}

impl<T: Clone> ProviderResult<T> {
    /// Returns `true` if the result is `Found`.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Returns a reference to the contained data if `Found`, otherwise `None`.
    #[must_use]
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Found(data) => Some(data),
            _ => None,
        }
    }
}
