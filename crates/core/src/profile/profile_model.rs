use serde::{Deserialize, Serialize};

/// Flat view of one character from the remote account summary.
///
/// The remote payload nests characters under sub-accounts; clients flatten it
/// on ingestion so the engine never branches on the wire shape. Produced
/// fresh on every run and never persisted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteCharacterSummary {
    pub name: String,
    pub realm_slug: String,
    pub class_id: i32,
    pub race_id: i32,
    pub level: i32,
    pub region: String,
}

/// Guild membership reported by a character's own detail fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteGuildSummary {
    pub name: String,
    pub realm_slug: String,
    pub region: String,
    pub faction: Option<String>,
}
