use serde_json::Value;
use std::sync::Arc;

/// A log of devtools protocol messages recorded during a page load.
#[derive(Debug, Clone, Default)]
pub struct DevtoolsLog {
    messages: Arc<[Value]>,
}

impl DevtoolsLog {
    #[must_use]
    pub fn new(messages: Vec<Value>) -> Self {
        Self { messages: messages.into() }
    }

    #[must_use]
    pub fn messages(&self) -> &[Value] {
        &self.messages
    }
}
