use async_trait::async_trait;

use super::{PlayableClass, PlayableRace, RealmInfo};
use crate::errors::Result;

/// Static-namespace data from the remote service.
#[async_trait]
pub trait StaticDataProviderTrait: Send + Sync {
    async fn fetch_playable_classes(&self, token: &str, region: &str)
        -> Result<Vec<PlayableClass>>;

    async fn fetch_playable_races(&self, token: &str, region: &str) -> Result<Vec<PlayableRace>>;

    async fn fetch_realms(&self, token: &str, region: &str) -> Result<Vec<RealmInfo>>;
}

/// Persistence for reference tables, keyed by remote id.
#[async_trait]
pub trait ReferenceDataRepositoryTrait: Send + Sync {
    async fn upsert_classes(&self, classes: Vec<PlayableClass>) -> Result<usize>;

    async fn upsert_races(&self, races: Vec<PlayableRace>) -> Result<usize>;

    async fn upsert_realms(&self, realms: Vec<RealmInfo>) -> Result<usize>;
}
