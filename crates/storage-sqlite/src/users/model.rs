use armory_core::users::User;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    Debug,
    Clone,
    Serialize,
    Deserialize,
)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: String,
    pub battle_tag: String,
    pub access_token: String,
    pub region: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<UserDB> for User {
    fn from(row: UserDB) -> Self {
        User {
            id: row.id,
            battle_tag: row.battle_tag,
            access_token: row.access_token,
            region: row.region,
        }
    }
}
