use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::{ReferenceDataRepositoryTrait, ReferenceImportSummary, StaticDataProviderTrait};
use crate::errors::{Error, Result};
use crate::users::UserRepositoryTrait;

#[async_trait]
pub trait ReferenceDataServiceTrait: Send + Sync {
    /// Import classes, races and realms using the given user's token.
    async fn import_for_user(&self, user_id: &str) -> Result<ReferenceImportSummary>;
}

/// One-shot reference import: fetch the three static indexes and upsert them.
/// Plain fetch-then-write with no identity reconciliation; any failure is a
/// plain error.
pub struct ReferenceDataService {
    users: Arc<dyn UserRepositoryTrait>,
    provider: Arc<dyn StaticDataProviderTrait>,
    repository: Arc<dyn ReferenceDataRepositoryTrait>,
}

impl ReferenceDataService {
    pub fn new(
        users: Arc<dyn UserRepositoryTrait>,
        provider: Arc<dyn StaticDataProviderTrait>,
        repository: Arc<dyn ReferenceDataRepositoryTrait>,
    ) -> Self {
        Self {
            users,
            provider,
            repository,
        }
    }
}

#[async_trait]
impl ReferenceDataServiceTrait for ReferenceDataService {
    async fn import_for_user(&self, user_id: &str) -> Result<ReferenceImportSummary> {
        let user = self
            .users
            .get_user(user_id)?
            .ok_or_else(|| Error::UserNotFound(user_id.to_string()))?;

        let classes = self
            .provider
            .fetch_playable_classes(&user.access_token, &user.region)
            .await?;
        let races = self
            .provider
            .fetch_playable_races(&user.access_token, &user.region)
            .await?;
        let realms = self
            .provider
            .fetch_realms(&user.access_token, &user.region)
            .await?;

        let summary = ReferenceImportSummary {
            classes: self.repository.upsert_classes(classes).await?,
            races: self.repository.upsert_races(races).await?,
            realms: self.repository.upsert_realms(realms).await?,
        };
        debug!(
            "Reference import wrote {} classes, {} races, {} realms",
            summary.classes, summary.races, summary.realms
        );
        Ok(summary)
    }
}
