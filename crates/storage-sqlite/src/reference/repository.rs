use async_trait::async_trait;
use diesel::prelude::*;

use armory_core::errors::Result;
use armory_core::reference::{
    PlayableClass, PlayableRace, RealmInfo, ReferenceDataRepositoryTrait,
};

use super::model::{PlayableClassDB, PlayableRaceDB, RealmDB};
use crate::db::WriteHandle;
use crate::errors::StorageError;
use crate::schema::{playable_classes, playable_races, realms};

pub struct ReferenceDataRepository {
    writer: WriteHandle,
}

impl ReferenceDataRepository {
    pub fn new(writer: WriteHandle) -> Self {
        Self { writer }
    }
}

#[async_trait]
impl ReferenceDataRepositoryTrait for ReferenceDataRepository {
    async fn upsert_classes(&self, classes: Vec<PlayableClass>) -> Result<usize> {
        self.writer
            .exec(move |conn| {
                let mut written = 0;
                for class in classes {
                    let row = PlayableClassDB::from(class);
                    written += diesel::insert_into(playable_classes::table)
                        .values(&row)
                        .on_conflict(playable_classes::id)
                        .do_update()
                        .set(playable_classes::name.eq(row.name.clone()))
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(written)
            })
            .await
    }

    async fn upsert_races(&self, races: Vec<PlayableRace>) -> Result<usize> {
        self.writer
            .exec(move |conn| {
                let mut written = 0;
                for race in races {
                    let row = PlayableRaceDB::from(race);
                    written += diesel::insert_into(playable_races::table)
                        .values(&row)
                        .on_conflict(playable_races::id)
                        .do_update()
                        .set(playable_races::name.eq(row.name.clone()))
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(written)
            })
            .await
    }

    async fn upsert_realms(&self, batch: Vec<RealmInfo>) -> Result<usize> {
        self.writer
            .exec(move |conn| {
                let mut written = 0;
                for realm in batch {
                    let row = RealmDB::from(realm);
                    written += diesel::insert_into(realms::table)
                        .values(&row)
                        .on_conflict(realms::id)
                        .do_update()
                        .set((
                            realms::name.eq(row.name.clone()),
                            realms::slug.eq(row.slug.clone()),
                            realms::region.eq(row.region.clone()),
                        ))
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(written)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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

    #[tokio::test]
    async fn class_import_is_rerunnable() {
        let (pool, writer) = setup_db();
        let repo = ReferenceDataRepository::new(writer);

        let classes = vec![
            PlayableClass {
                id: 1,
                name: "Warrior".to_string(),
            },
            PlayableClass {
                id: 7,
                name: "Shaman".to_string(),
            },
        ];
        assert_eq!(repo.upsert_classes(classes.clone()).await.expect("first"), 2);
        assert_eq!(repo.upsert_classes(classes).await.expect("second"), 2);

        let mut conn = get_connection(&pool).expect("conn");
        let rows = playable_classes::table
            .load::<PlayableClassDB>(&mut conn)
            .expect("load");
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn realm_rename_updates_in_place() {
        let (pool, writer) = setup_db();
        let repo = ReferenceDataRepository::new(writer);

        let realm = RealmInfo {
            id: 1190,
            name: "Area 52".to_string(),
            slug: "area52".to_string(),
            region: "us".to_string(),
        };
        repo.upsert_realms(vec![realm.clone()]).await.expect("first");

        let renamed = RealmInfo {
            name: "Area Fifty-Two".to_string(),
            ..realm
        };
        repo.upsert_realms(vec![renamed]).await.expect("second");

        let mut conn = get_connection(&pool).expect("conn");
        let rows = realms::table.load::<RealmDB>(&mut conn).expect("load");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Area Fifty-Two");
    }
}
