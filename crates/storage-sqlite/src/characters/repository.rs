use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use armory_core::characters::{Character, CharacterRepositoryTrait, CharacterUpsert};
use armory_core::errors::Result;
use armory_core::reconcile::NaturalKey;

use super::model::{CharacterDB, NewCharacterDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::characters;

pub struct CharacterRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CharacterRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl CharacterRepositoryTrait for CharacterRepository {
    async fn upsert_characters(&self, batch: Vec<CharacterUpsert>) -> Result<usize> {
        self.writer
            .exec(move |conn| {
                let now = Utc::now().to_rfc3339();
                let mut written = 0;

                for upsert in batch {
                    let CharacterUpsert {
                        name,
                        realm_slug,
                        region,
                        user_id,
                        guild_id,
                        level,
                        class_id,
                        race_id,
                    } = upsert;

                    let row = NewCharacterDB {
                        id: Uuid::new_v4().to_string(),
                        name: name.clone(),
                        realm_slug: realm_slug.clone(),
                        region: region.clone(),
                        user_id: Some(user_id.clone()),
                        guild_id: guild_id.clone(),
                        level,
                        class_id,
                        race_id,
                        created_at: now.clone(),
                        updated_at: now.clone(),
                    };

                    written += diesel::insert_into(characters::table)
                        .values(&row)
                        .on_conflict((
                            characters::name,
                            characters::realm_slug,
                            characters::region,
                        ))
                        .do_update()
                        .set((
                            characters::name.eq(name),
                            characters::realm_slug.eq(realm_slug),
                            characters::region.eq(region),
                            characters::user_id.eq(Some(user_id)),
                            characters::guild_id.eq(guild_id),
                            characters::level.eq(level),
                            characters::class_id.eq(class_id),
                            characters::race_id.eq(race_id),
                            characters::updated_at.eq(now.clone()),
                        ))
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }

                Ok(written)
            })
            .await
    }

    fn list_by_owner(&self, user_id: &str) -> Result<Vec<Character>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = characters::table
            .filter(characters::user_id.eq(user_id))
            .order(characters::name.asc())
            .load::<CharacterDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Character::from).collect())
    }

    fn list_keys_by_owner(&self, user_id: &str) -> Result<Vec<NaturalKey>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = characters::table
            .filter(characters::user_id.eq(user_id))
            .select((
                characters::name,
                characters::realm_slug,
                characters::region,
            ))
            .load::<(String, String, String)>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows
            .into_iter()
            .map(|(name, realm_slug, region)| NaturalKey::new(&name, &realm_slug, &region))
            .collect())
    }

    async fn delete_by_owner_and_key(&self, user_id: &str, key: &NaturalKey) -> Result<usize> {
        let owner = user_id.to_string();
        let key = key.clone();
        self.writer
            .exec(move |conn| {
                let affected = diesel::delete(
                    characters::table
                        .filter(characters::user_id.eq(owner))
                        .filter(characters::name.eq(key.name))
                        .filter(characters::realm_slug.eq(key.realm_slug))
                        .filter(characters::region.eq(key.region)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                Ok(affected)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    use armory_core::users::{User, UserRepositoryTrait};

    use crate::db::{create_pool, get_connection, init, run_migrations, write_actor::spawn_writer};
    use crate::users::UserRepository;

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

    async fn seed_user(pool: &Arc<DbPool>, writer: &WriteHandle, user_id: &str) {
        let repo = UserRepository::new(pool.clone(), writer.clone());
        repo.save_user(User {
            id: user_id.to_string(),
            battle_tag: format!("{user_id}#1234"),
            access_token: "token".to_string(),
            region: "us".to_string(),
        })
        .await
        .expect("seed user");
    }

    fn upsert(name: &str, owner: &str, guild_id: Option<&str>) -> CharacterUpsert {
        CharacterUpsert {
            name: name.to_string(),
            realm_slug: "icecrown".to_string(),
            region: "us".to_string(),
            user_id: owner.to_string(),
            guild_id: guild_id.map(str::to_string),
            level: 80,
            class_id: 7,
            race_id: 2,
        }
    }

    #[tokio::test]
    async fn upsert_matches_on_natural_key_case_insensitively() {
        let (pool, writer) = setup_db();
        seed_user(&pool, &writer, "u1").await;
        let repo = CharacterRepository::new(pool.clone(), writer);

        assert_eq!(
            repo.upsert_characters(vec![upsert("Thrall", "u1", None)])
                .await
                .expect("insert"),
            1
        );
        let mut renamed = upsert("THRALL", "u1", None);
        renamed.level = 81;
        repo.upsert_characters(vec![renamed]).await.expect("update");

        let rows = repo.list_by_owner("u1").expect("list");
        assert_eq!(rows.len(), 1);
        // Canonical casing follows the latest sighting.
        assert_eq!(rows[0].name, "THRALL");
        assert_eq!(rows[0].level, 81);
    }

    #[tokio::test]
    async fn upsert_reassigns_ownership_on_conflict() {
        let (pool, writer) = setup_db();
        seed_user(&pool, &writer, "u1").await;
        seed_user(&pool, &writer, "u2").await;
        let repo = CharacterRepository::new(pool, writer);

        repo.upsert_characters(vec![upsert("Thrall", "u1", None)])
            .await
            .expect("insert");
        repo.upsert_characters(vec![upsert("Thrall", "u2", None)])
            .await
            .expect("reown");

        assert!(repo.list_by_owner("u1").expect("list u1").is_empty());
        let rows = repo.list_by_owner("u2").expect("list u2");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].user_id.as_deref(), Some("u2"));
    }

    #[tokio::test]
    async fn upsert_preserves_guild_rank_set_elsewhere() {
        let (pool, writer) = setup_db();
        seed_user(&pool, &writer, "u1").await;
        let repo = CharacterRepository::new(pool.clone(), writer);

        repo.upsert_characters(vec![upsert("Thrall", "u1", None)])
            .await
            .expect("insert");

        {
            let mut conn = get_connection(&pool).expect("conn");
            diesel::update(characters::table)
                .set(characters::guild_rank.eq(Some(3)))
                .execute(&mut conn)
                .expect("set rank");
        }

        repo.upsert_characters(vec![upsert("Thrall", "u1", None)])
            .await
            .expect("refresh");

        let rows = repo.list_by_owner("u1").expect("list");
        assert_eq!(rows[0].guild_rank, Some(3));
    }

    #[tokio::test]
    async fn list_keys_are_lowercased_for_comparison() {
        let (pool, writer) = setup_db();
        seed_user(&pool, &writer, "u1").await;
        let repo = CharacterRepository::new(pool, writer);

        repo.upsert_characters(vec![upsert("Thrall", "u1", None)])
            .await
            .expect("insert");

        let keys = repo.list_keys_by_owner("u1").expect("keys");
        assert_eq!(keys, vec![NaturalKey::new("thrall", "icecrown", "us")]);
    }

    #[tokio::test]
    async fn delete_targets_exactly_one_owned_row() {
        let (pool, writer) = setup_db();
        seed_user(&pool, &writer, "u1").await;
        seed_user(&pool, &writer, "u2").await;
        let repo = CharacterRepository::new(pool, writer);

        repo.upsert_characters(vec![upsert("Thrall", "u1", None)])
            .await
            .expect("insert u1");
        repo.upsert_characters(vec![upsert("Voljin", "u2", None)])
            .await
            .expect("insert u2");

        // Wrong owner: no row matches.
        let key = NaturalKey::new("voljin", "icecrown", "us");
        assert_eq!(
            repo.delete_by_owner_and_key("u1", &key).await.expect("noop"),
            0
        );

        let key = NaturalKey::new("thrall", "icecrown", "us");
        assert_eq!(
            repo.delete_by_owner_and_key("u1", &key)
                .await
                .expect("delete"),
            1
        );
        assert!(repo.list_by_owner("u1").expect("list").is_empty());
        assert_eq!(repo.list_by_owner("u2").expect("list").len(), 1);
    }

    #[tokio::test]
    async fn batch_write_is_atomic() {
        let (pool, writer) = setup_db();
        seed_user(&pool, &writer, "u1").await;
        let repo = CharacterRepository::new(pool.clone(), writer);

        // Second row references a guild id that does not exist; the FK
        // violation must roll back the whole batch.
        let batch = vec![
            upsert("Thrall", "u1", None),
            upsert("Voljin", "u1", Some("g-missing")),
        ];
        let outcome = repo.upsert_characters(batch).await;

        assert!(outcome.is_err());
        assert!(repo.list_by_owner("u1").expect("list").is_empty());
    }
}
