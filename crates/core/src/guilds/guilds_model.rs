use serde::{Deserialize, Serialize};

use crate::profile::RemoteGuildSummary;

/// A persisted guild row.
///
/// Guilds are created on first sight and never deleted by the engine, since
/// rows may be referenced by characters belonging to other users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guild {
    pub id: String,
    pub name: String,
    pub realm_slug: String,
    pub region: String,
    pub faction: Option<String>,
}

/// A guild as it enters the store, before an id has been assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGuild {
    pub name: String,
    pub realm_slug: String,
    pub region: String,
    pub faction: Option<String>,
}

impl From<RemoteGuildSummary> for NewGuild {
    fn from(summary: RemoteGuildSummary) -> Self {
        Self {
            name: summary.name,
            realm_slug: summary.realm_slug,
            region: summary.region,
            faction: summary.faction,
        }
    }
}
