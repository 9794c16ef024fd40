use core::fmt;
use serde_json::Value;
use std::sync::Arc;

/// Identity of a trace, used to key memoized computations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TraceId(Arc<str>);

impl TraceId {
    #[must_use]
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A recorded performance trace.
///
/// Cloning is cheap; clones share the same events and identity.
#[derive(Debug, Clone)]
pub struct Trace {
    id: TraceId,
    events: Arc<[Value]>,
}

impl Trace {
    #[must_use]
    pub fn new(id: TraceId, events: Vec<Value>) -> Self {
        Self { id, events: events.into() }
    }

    #[must_use]
    pub const fn id(&self) -> &TraceId {
        &self.id
    }

    #[must_use]
    pub fn events(&self) -> &[Value] {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clones_share_identity() {
        let trace = Trace::new(TraceId::new("page-load"), vec![json!({ "name": "LayoutShift" })]);
        let clone = trace.clone();

        assert_eq!(clone.id(), trace.id());
        assert_eq!(clone.events().len(), 1);
        assert_eq!(trace.id().to_string(), "page-load");
    }

    #[test]
    fn test_ids_compare_by_value() {
        assert_eq!(TraceId::new("a"), TraceId::new(String::from("a")));
        assert_ne!(TraceId::new("a"), TraceId::new("b"));
        assert_eq!(TraceId::new("a").as_str(), "a");
    }
}
