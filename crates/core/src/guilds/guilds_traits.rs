use async_trait::async_trait;

use super::{Guild, NewGuild};
use crate::errors::Result;

#[async_trait]
pub trait GuildRepositoryTrait: Send + Sync {
    /// Upsert a batch of guilds keyed on (name, realm_slug, region) and
    /// return the persisted rows, ids included.
    ///
    /// The batch is atomic: either every row lands or none does.
    async fn upsert_guilds(&self, guilds: Vec<NewGuild>) -> Result<Vec<Guild>>;
}
