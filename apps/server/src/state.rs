//! Service wiring shared across request handlers.

use std::sync::Arc;

use armory_core::characters::CharacterRepositoryTrait;
use armory_core::reconcile::{ReconcileService, ReconcileServiceTrait};
use armory_core::reference::{ReferenceDataService, ReferenceDataServiceTrait};
use armory_core::users::UserRepositoryTrait;
use armory_profile_client::ProfileApiClient;
use armory_storage_sqlite::db::{create_pool, init, run_migrations, write_actor::spawn_writer};
use armory_storage_sqlite::{
    CharacterRepository, GuildRepository, ReferenceDataRepository, UserRepository,
};

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub reconcile_service: Arc<dyn ReconcileServiceTrait>,
    pub reference_service: Arc<dyn ReferenceDataServiceTrait>,
    pub character_repository: Arc<dyn CharacterRepositoryTrait>,
}

impl AppState {
    pub fn build(config: &ServerConfig) -> anyhow::Result<Self> {
        let db_path = init(&config.data_dir)?;
        run_migrations(&db_path)?;
        let pool = create_pool(&db_path)?;
        let writer = spawn_writer(pool.as_ref().clone());

        let users: Arc<dyn UserRepositoryTrait> =
            Arc::new(UserRepository::new(pool.clone(), writer.clone()));
        let guilds = Arc::new(GuildRepository::new(writer.clone()));
        let characters = Arc::new(CharacterRepository::new(pool, writer.clone()));
        let reference = Arc::new(ReferenceDataRepository::new(writer));
        let client = Arc::new(ProfileApiClient::with_base_url(
            config.profile_api_base_url.as_deref(),
            &config.locale,
        ));

        let reconcile_service = Arc::new(ReconcileService::new(
            users.clone(),
            guilds,
            characters.clone(),
            client.clone(),
        ));
        let reference_service = Arc::new(ReferenceDataService::new(users, client, reference));

        Ok(Self {
            reconcile_service,
            reference_service,
            character_repository: characters,
        })
    }
}
