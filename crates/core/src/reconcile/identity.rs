//! Natural-key identity for characters and guilds.
//!
//! The remote service enforces unique character and guild names per realm per
//! region, so (name, realm_slug, region) identifies a row globally. Name
//! lookups are case-insensitive; stored rows keep the remote service's
//! canonical casing, and this module owns the comparison form.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::guilds::Guild;
use crate::profile::{RemoteCharacterSummary, RemoteGuildSummary};

/// Composite business identity of a character or guild, in comparison form.
///
/// All components are lowercased on construction, so two keys built from
/// differently-cased sightings of the same entity compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NaturalKey {
    pub name: String,
    pub realm_slug: String,
    pub region: String,
}

impl NaturalKey {
    pub fn new(name: &str, realm_slug: &str, region: &str) -> Self {
        Self {
            name: name.to_lowercase(),
            realm_slug: realm_slug.to_lowercase(),
            region: region.to_lowercase(),
        }
    }

    pub fn for_character(character: &RemoteCharacterSummary) -> Self {
        Self::new(&character.name, &character.realm_slug, &character.region)
    }

    pub fn for_guild(guild: &RemoteGuildSummary) -> Self {
        Self::new(&guild.name, &guild.realm_slug, &guild.region)
    }
}

impl fmt::Display for NaturalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} ({})", self.name, self.realm_slug, self.region)
    }
}

/// Drop duplicate guild sightings within a single run. First sighting wins,
/// so the faction (when present) comes from whichever character reported the
/// guild first.
pub fn dedupe_guilds(guilds: Vec<RemoteGuildSummary>) -> Vec<RemoteGuildSummary> {
    let mut seen = HashSet::new();
    guilds
        .into_iter()
        .filter(|guild| seen.insert(NaturalKey::for_guild(guild)))
        .collect()
}

/// Map persisted guild rows back to their natural keys.
///
/// The map contents are independent of row order, so re-running with the
/// same remote data resolves to the same ids.
pub fn build_guild_id_map(guilds: &[Guild]) -> HashMap<NaturalKey, String> {
    guilds
        .iter()
        .map(|guild| {
            (
                NaturalKey::new(&guild.name, &guild.realm_slug, &guild.region),
                guild.id.clone(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guild(name: &str, realm: &str, region: &str) -> RemoteGuildSummary {
        RemoteGuildSummary {
            name: name.to_string(),
            realm_slug: realm.to_string(),
            region: region.to_string(),
            faction: None,
        }
    }

    #[test]
    fn keys_compare_case_insensitively() {
        let a = NaturalKey::new("Thrall", "Icecrown", "US");
        let b = NaturalKey::new("thrall", "icecrown", "us");
        assert_eq!(a, b);
    }

    #[test]
    fn keys_distinguish_realm_and_region() {
        let base = NaturalKey::new("thrall", "icecrown", "us");
        assert_ne!(base, NaturalKey::new("thrall", "area52", "us"));
        assert_ne!(base, NaturalKey::new("thrall", "icecrown", "eu"));
    }

    #[test]
    fn character_key_preserves_nothing_but_identity() {
        let character = RemoteCharacterSummary {
            name: "Jaina".to_string(),
            realm_slug: "Proudmoore".to_string(),
            class_id: 8,
            race_id: 1,
            level: 80,
            region: "US".to_string(),
        };
        assert_eq!(
            NaturalKey::for_character(&character),
            NaturalKey::new("jaina", "proudmoore", "us")
        );
    }

    #[test]
    fn dedupe_keeps_first_sighting() {
        let mut first = guild("Alpha", "area52", "us");
        first.faction = Some("Horde".to_string());
        let duplicate = guild("alpha", "Area52", "US");
        let other = guild("Beta", "area52", "us");

        let unique = dedupe_guilds(vec![first.clone(), duplicate, other.clone()]);
        assert_eq!(unique, vec![first, other]);
    }

    #[test]
    fn dedupe_of_empty_input_is_empty() {
        assert!(dedupe_guilds(Vec::new()).is_empty());
    }

    #[test]
    fn guild_id_map_is_order_independent() {
        let rows = vec![
            Guild {
                id: "g-1".to_string(),
                name: "Alpha".to_string(),
                realm_slug: "area52".to_string(),
                region: "us".to_string(),
                faction: None,
            },
            Guild {
                id: "g-2".to_string(),
                name: "Beta".to_string(),
                realm_slug: "area52".to_string(),
                region: "us".to_string(),
                faction: None,
            },
        ];
        let mut reversed = rows.clone();
        reversed.reverse();

        assert_eq!(build_guild_id_map(&rows), build_guild_id_map(&reversed));
        assert_eq!(
            build_guild_id_map(&rows).get(&NaturalKey::new("alpha", "area52", "us")),
            Some(&"g-1".to_string())
        );
    }
}
