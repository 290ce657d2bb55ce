use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;

use armory_core::errors::Result;
use armory_core::users::{User, UserRepositoryTrait};

use super::model::UserDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::users;

pub struct UserRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        let row = users::table
            .find(user_id)
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(User::from))
    }

    async fn save_user(&self, user: User) -> Result<User> {
        self.writer
            .exec(move |conn| {
                let now = Utc::now().to_rfc3339();
                let row = UserDB {
                    id: user.id.clone(),
                    battle_tag: user.battle_tag.clone(),
                    access_token: user.access_token.clone(),
                    region: user.region.clone(),
                    created_at: now.clone(),
                    updated_at: now.clone(),
                };

                diesel::insert_into(users::table)
                    .values(&row)
                    .on_conflict(users::id)
                    .do_update()
                    .set((
                        users::battle_tag.eq(row.battle_tag.clone()),
                        users::access_token.eq(row.access_token.clone()),
                        users::region.eq(row.region.clone()),
                        users::updated_at.eq(now),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                Ok(user)
            })
            .await
    }
}
