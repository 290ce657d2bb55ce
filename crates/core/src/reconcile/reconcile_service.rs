use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use tokio::sync::Mutex;

use super::identity::{build_guild_id_map, dedupe_guilds, NaturalKey};
use super::ReconcileSummary;
use crate::characters::{CharacterRepositoryTrait, CharacterUpsert};
use crate::errors::{Error, Result};
use crate::guilds::{GuildRepositoryTrait, NewGuild};
use crate::profile::{ProfileProviderTrait, RemoteCharacterSummary, RemoteGuildSummary};
use crate::users::UserRepositoryTrait;

#[async_trait]
pub trait ReconcileServiceTrait: Send + Sync {
    /// Bring the stored roster for `user_id` in line with the remote account.
    ///
    /// Fails with [`Error::UserNotFound`], [`Error::Unauthorized`] or a
    /// database error; in the first two cases the store is untouched.
    async fn reconcile(&self, user_id: &str) -> Result<ReconcileSummary>;
}

/// The reconciliation engine.
///
/// One run is sequential: account fetch, per-character detail fetches, guild
/// batch write, character batch write, orphan cleanup. The two batch writes
/// are the only commit points; per-character detail failures and per-row
/// cleanup failures degrade and are logged, never raised.
pub struct ReconcileService {
    users: Arc<dyn UserRepositoryTrait>,
    guilds: Arc<dyn GuildRepositoryTrait>,
    characters: Arc<dyn CharacterRepositoryTrait>,
    profile: Arc<dyn ProfileProviderTrait>,
    /// Per-user run guards. Concurrent runs for the same user would race the
    /// cleanup read against the other run's writes, so runs are serialized
    /// per user; distinct users proceed independently.
    run_guards: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl ReconcileService {
    pub fn new(
        users: Arc<dyn UserRepositoryTrait>,
        guilds: Arc<dyn GuildRepositoryTrait>,
        characters: Arc<dyn CharacterRepositoryTrait>,
        profile: Arc<dyn ProfileProviderTrait>,
    ) -> Self {
        Self {
            users,
            guilds,
            characters,
            profile,
            run_guards: Mutex::new(HashMap::new()),
        }
    }

    async fn run_guard(&self, user_id: &str) -> Arc<Mutex<()>> {
        let mut guards = self.run_guards.lock().await;
        Arc::clone(
            guards
                .entry(user_id.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(()))),
        )
    }

    /// Fetch guild membership for every roster entry, keyed by the
    /// character's own identity. A failed lookup yields no entry for that
    /// character; it never aborts the run.
    async fn fetch_memberships(
        &self,
        token: &str,
        roster: &[RemoteCharacterSummary],
    ) -> HashMap<NaturalKey, RemoteGuildSummary> {
        let mut memberships = HashMap::with_capacity(roster.len());
        for character in roster {
            let detail = self
                .profile
                .fetch_character_detail(
                    token,
                    &character.region,
                    &character.realm_slug,
                    &character.name,
                )
                .await;
            match detail {
                Ok(Some(guild)) => {
                    memberships.insert(NaturalKey::for_character(character), guild);
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(
                        "Guild lookup failed for {}-{}: {}. Continuing without guild.",
                        character.name, character.realm_slug, e
                    );
                }
            }
        }
        memberships
    }

    /// Delete stored characters the user no longer owns remotely.
    ///
    /// Best-effort: failures are logged and skipped, and never affect the
    /// returned character count. Rows owned by other users are untouched
    /// regardless of natural-key overlap.
    async fn cleanup_orphans(&self, user_id: &str, roster: &[RemoteCharacterSummary]) {
        let current: HashSet<NaturalKey> = roster.iter().map(NaturalKey::for_character).collect();

        let stored = match self.characters.list_keys_by_owner(user_id) {
            Ok(keys) => keys,
            Err(e) => {
                warn!("Orphan scan failed for user '{user_id}': {e}. Skipping cleanup.");
                return;
            }
        };

        for key in stored {
            if current.contains(&key) {
                continue;
            }
            match self.characters.delete_by_owner_and_key(user_id, &key).await {
                Ok(_) => debug!("Removed orphaned character {key}"),
                Err(e) => warn!("Failed to remove orphaned character {key}: {e}"),
            }
        }
    }
}

#[async_trait]
impl ReconcileServiceTrait for ReconcileService {
    async fn reconcile(&self, user_id: &str) -> Result<ReconcileSummary> {
        let guard = self.run_guard(user_id).await;
        let _run = guard.lock().await;

        let user = self
            .users
            .get_user(user_id)?
            .ok_or_else(|| Error::UserNotFound(user_id.to_string()))?;

        let roster = self
            .profile
            .fetch_account_roster(&user.access_token, &user.region)
            .await?;
        debug!(
            "Remote roster for {} has {} characters",
            user.battle_tag,
            roster.len()
        );

        let memberships = self.fetch_memberships(&user.access_token, &roster).await;

        // Guilds land first so characters can reference resolved ids. A
        // failed guild batch aborts the run before any character write.
        // Sightings are collected in roster order so first-seen-wins is
        // deterministic across runs.
        let sightings: Vec<RemoteGuildSummary> = roster
            .iter()
            .filter_map(|character| {
                memberships
                    .get(&NaturalKey::for_character(character))
                    .cloned()
            })
            .collect();
        let unique = dedupe_guilds(sightings);
        let guild_ids = if unique.is_empty() {
            HashMap::new()
        } else {
            let upserted = self
                .guilds
                .upsert_guilds(unique.into_iter().map(NewGuild::from).collect())
                .await?;
            build_guild_id_map(&upserted)
        };

        // Each character's guild comes from its own detail fetch; list order
        // between roster and guilds carries no meaning.
        let batch: Vec<CharacterUpsert> = roster
            .iter()
            .map(|character| {
                let guild_id = memberships
                    .get(&NaturalKey::for_character(character))
                    .and_then(|guild| guild_ids.get(&NaturalKey::for_guild(guild)))
                    .cloned();
                CharacterUpsert {
                    name: character.name.clone(),
                    realm_slug: character.realm_slug.clone(),
                    region: character.region.clone(),
                    user_id: user.id.clone(),
                    guild_id,
                    level: character.level,
                    class_id: character.class_id,
                    race_id: character.race_id,
                }
            })
            .collect();

        let characters_synced = if batch.is_empty() {
            0
        } else {
            self.characters.upsert_characters(batch).await?
        };

        self.cleanup_orphans(&user.id, &roster).await;

        Ok(ReconcileSummary {
            user_id: user.id,
            battle_tag: user.battle_tag,
            characters_synced,
        })
    }
}
