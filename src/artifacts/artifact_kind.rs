use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Names a category of artifact an audit may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ArtifactKind {
    /// Performance traces recorded while the page loaded.
    Traces,

    /// Devtools protocol message logs recorded while the page loaded.
    DevtoolsLogs,
}
