use super::{ArtifactKind, DevtoolsLog, Trace};
use std::collections::HashMap;

/// Name of the pass whose artifacts metric audits read.
pub const DEFAULT_PASS: &str = "defaultPass";

/// The bag of artifacts gathered for one page load.
#[derive(Debug, Clone, Default)]
pub struct Artifacts {
    traces: HashMap<String, Trace>,
    devtools_logs: HashMap<String, DevtoolsLog>,
}

impl Artifacts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a trace recorded by the given pass.
    #[must_use]
    pub fn with_trace(mut self, pass: impl Into<String>, trace: Trace) -> Self {
        let _ = self.traces.insert(pass.into(), trace);
        self
    }

    /// Add a devtools log recorded by the given pass.
    #[must_use]
    pub fn with_devtools_log(mut self, pass: impl Into<String>, log: DevtoolsLog) -> Self {
        let _ = self.devtools_logs.insert(pass.into(), log);
        self
    }

    #[must_use]
    pub fn trace(&self, pass: &str) -> Option<&Trace> {
        self.traces.get(pass)
    }

    #[must_use]
    pub fn devtools_log(&self, pass: &str) -> Option<&DevtoolsLog> {
        self.devtools_logs.get(pass)
    }

    /// Whether at least one artifact of the given kind was gathered.
    #[must_use]
    pub fn contains(&self, kind: ArtifactKind) -> bool {
        match kind {
            ArtifactKind::Traces => !self.traces.is_empty(),
            ArtifactKind::DevtoolsLogs => !self.devtools_logs.is_empty(),
        }
    }

    /// The subset of `required` that was not gathered, in the order given.
    #[must_use]
    pub fn missing(&self, required: &[ArtifactKind]) -> Vec<ArtifactKind> {
        required.iter().copied().filter(|kind| !self.contains(*kind)).collect()
    }
}
