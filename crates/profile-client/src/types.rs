//! Wire DTOs for the remote profile API and their flattening into the core
//! summary shapes.
//!
//! The account summary nests characters under sub-accounts
//! (account -> wow_accounts -> characters); [`flatten_roster`] collapses that
//! immediately on ingestion.

use serde::Deserialize;

use armory_core::profile::{RemoteCharacterSummary, RemoteGuildSummary};

/// Error body returned by the remote service on non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub code: Option<i32>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────
// Account profile (profile namespace)
// ─────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AccountProfileSummary {
    #[serde(default)]
    pub wow_accounts: Vec<WowAccountSummary>,
}

#[derive(Debug, Deserialize)]
pub struct WowAccountSummary {
    #[serde(default)]
    pub characters: Vec<AccountCharacterSummary>,
}

#[derive(Debug, Deserialize)]
pub struct AccountCharacterSummary {
    pub name: String,
    pub realm: RealmRef,
    pub playable_class: IdRef,
    pub playable_race: IdRef,
    pub level: i32,
}

#[derive(Debug, Deserialize)]
pub struct RealmRef {
    pub slug: String,
}

#[derive(Debug, Deserialize)]
pub struct IdRef {
    pub id: i32,
}

/// Character profile; only guild membership is of interest here.
#[derive(Debug, Deserialize)]
pub struct CharacterProfileSummary {
    #[serde(default)]
    pub guild: Option<GuildRef>,
}

#[derive(Debug, Deserialize)]
pub struct GuildRef {
    pub name: String,
    pub realm: RealmRef,
    #[serde(default)]
    pub faction: Option<FactionRef>,
}

#[derive(Debug, Deserialize)]
pub struct FactionRef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────
// Static data indexes (static namespace)
// ─────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ClassIndexResponse {
    #[serde(default)]
    pub classes: Vec<NamedId>,
}

#[derive(Debug, Deserialize)]
pub struct RaceIndexResponse {
    #[serde(default)]
    pub races: Vec<NamedId>,
}

#[derive(Debug, Deserialize)]
pub struct RealmIndexResponse {
    #[serde(default)]
    pub realms: Vec<RealmIndexEntry>,
}

#[derive(Debug, Deserialize)]
pub struct NamedId {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RealmIndexEntry {
    pub id: i32,
    pub name: String,
    pub slug: String,
}

/// Flatten the nested account payload into per-character summaries.
pub fn flatten_roster(
    summary: AccountProfileSummary,
    region: &str,
) -> Vec<RemoteCharacterSummary> {
    summary
        .wow_accounts
        .into_iter()
        .flat_map(|account| account.characters)
        .map(|character| RemoteCharacterSummary {
            name: character.name,
            realm_slug: character.realm.slug,
            class_id: character.playable_class.id,
            race_id: character.playable_race.id,
            level: character.level,
            region: region.to_string(),
        })
        .collect()
}

pub fn to_guild_summary(guild: GuildRef, region: &str) -> RemoteGuildSummary {
    // Localized faction name when present, machine type as fallback.
    let faction = guild.faction.and_then(|faction| faction.name.or(faction.kind));
    RemoteGuildSummary {
        name: guild.name,
        realm_slug: guild.realm.slug,
        region: region.to_string(),
        faction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_characters_across_sub_accounts() {
        let json = r#"{
            "id": 123456,
            "wow_accounts": [
                {
                    "characters": [
                        {
                            "name": "Thrall",
                            "realm": {"key": {"href": "..."}, "name": "Icecrown", "id": 104, "slug": "icecrown"},
                            "playable_class": {"key": {"href": "..."}, "id": 7},
                            "playable_race": {"key": {"href": "..."}, "id": 2},
                            "level": 80,
                            "faction": {"type": "HORDE", "name": "Horde"}
                        },
                        {
                            "name": "Jaina",
                            "realm": {"name": "Proudmoore", "id": 5, "slug": "proudmoore"},
                            "playable_class": {"id": 8},
                            "playable_race": {"id": 1},
                            "level": 70
                        }
                    ]
                },
                {
                    "characters": [
                        {
                            "name": "Baine",
                            "realm": {"name": "Mulgore", "id": 9, "slug": "mulgore"},
                            "playable_class": {"id": 11},
                            "playable_race": {"id": 6},
                            "level": 25
                        }
                    ]
                }
            ]
        }"#;

        let summary: AccountProfileSummary = serde_json::from_str(json).unwrap();
        let roster = flatten_roster(summary, "us");

        assert_eq!(roster.len(), 3);
        assert_eq!(roster[0].name, "Thrall");
        assert_eq!(roster[0].realm_slug, "icecrown");
        assert_eq!(roster[0].class_id, 7);
        assert_eq!(roster[0].race_id, 2);
        assert_eq!(roster[0].level, 80);
        assert_eq!(roster[0].region, "us");
        assert_eq!(roster[2].name, "Baine");
    }

    #[test]
    fn empty_account_flattens_to_empty_roster() {
        let summary: AccountProfileSummary = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert!(flatten_roster(summary, "us").is_empty());
    }

    #[test]
    fn character_profile_without_guild_parses_to_none() {
        let json = r#"{"name": "Thrall", "level": 80}"#;
        let profile: CharacterProfileSummary = serde_json::from_str(json).unwrap();
        assert!(profile.guild.is_none());
    }

    #[test]
    fn guild_summary_carries_faction_name() {
        let json = r#"{
            "name": "Thrall",
            "guild": {
                "name": "Horde Vanguard",
                "realm": {"name": "Icecrown", "id": 104, "slug": "icecrown"},
                "faction": {"type": "HORDE", "name": "Horde"}
            }
        }"#;
        let profile: CharacterProfileSummary = serde_json::from_str(json).unwrap();
        let guild = to_guild_summary(profile.guild.unwrap(), "us");

        assert_eq!(guild.name, "Horde Vanguard");
        assert_eq!(guild.realm_slug, "icecrown");
        assert_eq!(guild.region, "us");
        assert_eq!(guild.faction.as_deref(), Some("Horde"));
    }

    #[test]
    fn faction_falls_back_to_machine_type() {
        let json = r#"{
            "guild": {
                "name": "Alpha",
                "realm": {"slug": "area52"},
                "faction": {"type": "ALLIANCE"}
            }
        }"#;
        let profile: CharacterProfileSummary = serde_json::from_str(json).unwrap();
        let guild = to_guild_summary(profile.guild.unwrap(), "us");
        assert_eq!(guild.faction.as_deref(), Some("ALLIANCE"));
    }

    #[test]
    fn error_body_parses() {
        let json = r#"{"code": 403, "type": "BLZWEBAPI00000403", "detail": "Forbidden"}"#;
        let error: ApiErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(error.code, Some(403));
        assert_eq!(error.detail.as_deref(), Some("Forbidden"));
        assert!(error.kind.is_some());
    }

    #[test]
    fn realm_index_parses() {
        let json = r#"{"realms": [{"id": 1190, "name": "Area 52", "slug": "area52"}]}"#;
        let index: RealmIndexResponse = serde_json::from_str(json).unwrap();
        assert_eq!(index.realms.len(), 1);
        assert_eq!(index.realms[0].slug, "area52");
    }
}
