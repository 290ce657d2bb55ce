use serde::{Deserialize, Serialize};

/// A playable class from the static data index, keyed by its remote id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayableClass {
    pub id: i32,
    pub name: String,
}

/// A playable race from the static data index, keyed by its remote id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayableRace {
    pub id: i32,
    pub name: String,
}

/// A realm from the static data index, keyed by its remote id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealmInfo {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub region: String,
}

/// Row counts written by one reference import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceImportSummary {
    pub classes: usize,
    pub races: usize,
    pub realms: usize,
}
