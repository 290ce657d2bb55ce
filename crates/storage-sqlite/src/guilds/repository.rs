use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use armory_core::errors::Result;
use armory_core::guilds::{Guild, GuildRepositoryTrait, NewGuild};

use super::model::GuildDB;
use crate::db::WriteHandle;
use crate::errors::StorageError;
use crate::schema::guilds;

pub struct GuildRepository {
    writer: WriteHandle,
}

impl GuildRepository {
    pub fn new(writer: WriteHandle) -> Self {
        Self { writer }
    }
}

#[async_trait]
impl GuildRepositoryTrait for GuildRepository {
    async fn upsert_guilds(&self, batch: Vec<NewGuild>) -> Result<Vec<Guild>> {
        self.writer
            .exec(move |conn| {
                let now = Utc::now().to_rfc3339();
                let mut persisted = Vec::with_capacity(batch.len());

                for incoming in batch {
                    let row = GuildDB {
                        id: Uuid::new_v4().to_string(),
                        name: incoming.name.clone(),
                        realm_slug: incoming.realm_slug.clone(),
                        region: incoming.region.clone(),
                        faction: incoming.faction.clone(),
                        created_at: now.clone(),
                        updated_at: now.clone(),
                    };

                    // On conflict the canonical casing is refreshed; faction
                    // is only overwritten by a present incoming value.
                    let saved: GuildDB = if let Some(faction) = incoming.faction {
                        diesel::insert_into(guilds::table)
                            .values(&row)
                            .on_conflict((guilds::name, guilds::realm_slug, guilds::region))
                            .do_update()
                            .set((
                                guilds::name.eq(incoming.name),
                                guilds::realm_slug.eq(incoming.realm_slug),
                                guilds::region.eq(incoming.region),
                                guilds::faction.eq(Some(faction)),
                                guilds::updated_at.eq(now.clone()),
                            ))
                            .returning(GuildDB::as_returning())
                            .get_result(conn)
                    } else {
                        diesel::insert_into(guilds::table)
                            .values(&row)
                            .on_conflict((guilds::name, guilds::realm_slug, guilds::region))
                            .do_update()
                            .set((
                                guilds::name.eq(incoming.name),
                                guilds::realm_slug.eq(incoming.realm_slug),
                                guilds::region.eq(incoming.region),
                                guilds::updated_at.eq(now.clone()),
                            ))
                            .returning(GuildDB::as_returning())
                            .get_result(conn)
                    }
                    .map_err(StorageError::from)?;

                    persisted.push(Guild::from(saved));
                }

                Ok(persisted)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::dsl::count_star;
    use std::sync::Arc;
    use tempfile::tempdir;

    use crate::db::{
        create_pool, get_connection, init, run_migrations, write_actor::spawn_writer, DbPool,
    };

    fn setup_db() -> (Arc<DbPool>, WriteHandle) {
        let app_data = tempdir()
            .expect("tempdir")
            .keep()
            .to_string_lossy()
            .to_string();
        let db_path = init(&app_data).expect("init db");
        run_migrations(&db_path).expect("migrate db");
        let pool = create_pool(&db_path).expect("create pool");
        let writer = spawn_writer(pool.as_ref().clone());
        (pool, writer)
    }

    fn new_guild(name: &str, faction: Option<&str>) -> NewGuild {
        NewGuild {
            name: name.to_string(),
            realm_slug: "area52".to_string(),
            region: "us".to_string(),
            faction: faction.map(str::to_string),
        }
    }

    fn count_guilds(pool: &Arc<DbPool>) -> i64 {
        let mut conn = get_connection(pool).expect("conn");
        guilds::table
            .select(count_star())
            .first(&mut conn)
            .expect("count")
    }

    #[tokio::test]
    async fn upsert_creates_then_reuses_the_same_row() {
        let (pool, writer) = setup_db();
        let repo = GuildRepository::new(writer);

        let first = repo
            .upsert_guilds(vec![new_guild("Alpha", Some("Horde"))])
            .await
            .expect("first upsert");
        let second = repo
            .upsert_guilds(vec![new_guild("ALPHA", None)])
            .await
            .expect("second upsert");

        assert_eq!(first[0].id, second[0].id);
        assert_eq!(count_guilds(&pool), 1);
        // Canonical casing follows the latest sighting.
        assert_eq!(second[0].name, "ALPHA");
    }

    #[tokio::test]
    async fn absent_faction_does_not_clobber_a_known_one() {
        let (_pool, writer) = setup_db();
        let repo = GuildRepository::new(writer);

        repo.upsert_guilds(vec![new_guild("Alpha", Some("Horde"))])
            .await
            .expect("first upsert");
        let second = repo
            .upsert_guilds(vec![new_guild("Alpha", None)])
            .await
            .expect("second upsert");

        assert_eq!(second[0].faction.as_deref(), Some("Horde"));
    }

    #[tokio::test]
    async fn distinct_realms_produce_distinct_rows() {
        let (pool, writer) = setup_db();
        let repo = GuildRepository::new(writer);

        let mut other_realm = new_guild("Alpha", None);
        other_realm.realm_slug = "icecrown".to_string();

        let rows = repo
            .upsert_guilds(vec![new_guild("Alpha", None), other_realm])
            .await
            .expect("upsert");

        assert_ne!(rows[0].id, rows[1].id);
        assert_eq!(count_guilds(&pool), 2);
    }
}
