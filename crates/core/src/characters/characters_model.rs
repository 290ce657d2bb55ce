use serde::{Deserialize, Serialize};

/// A persisted character row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: String,
    pub name: String,
    pub realm_slug: String,
    pub region: String,
    /// Owning user, if any. A character may exist without a linked user,
    /// e.g. when discovered outside a reconciliation run.
    pub user_id: Option<String>,
    pub guild_id: Option<String>,
    pub level: i32,
    pub class_id: i32,
    pub race_id: i32,
    /// Rank within the guild. Carried on the row but written by the guild
    /// roster importer, not by roster reconciliation.
    pub guild_rank: Option<i32>,
}

/// One character write within a reconciliation batch.
///
/// The upsert matches on (name, realm_slug, region) and always sets the owner
/// to the reconciling user, so a transferred character follows whichever user
/// reconciled most recently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterUpsert {
    pub name: String,
    pub realm_slug: String,
    pub region: String,
    pub user_id: String,
    pub guild_id: Option<String>,
    pub level: i32,
    pub class_id: i32,
    pub race_id: i32,
}
