use armory_core::characters::Character;
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
#[diesel(table_name = crate::schema::characters)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CharacterDB {
    pub id: String,
    pub name: String,
    pub realm_slug: String,
    pub region: String,
    pub user_id: Option<String>,
    pub guild_id: Option<String>,
    pub level: i32,
    pub class_id: i32,
    pub race_id: i32,
    pub guild_rank: Option<i32>,
    pub created_at: String,
    pub updated_at: String,
}

/// Insert shape for reconciliation writes. `guild_rank` is absent so a fresh
/// row starts NULL and a conflicting row keeps whatever the roster importer
/// put there.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::characters)]
pub struct NewCharacterDB {
    pub id: String,
    pub name: String,
    pub realm_slug: String,
    pub region: String,
    pub user_id: Option<String>,
    pub guild_id: Option<String>,
    pub level: i32,
    pub class_id: i32,
    pub race_id: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<CharacterDB> for Character {
    fn from(row: CharacterDB) -> Self {
        Character {
            id: row.id,
            name: row.name,
            realm_slug: row.realm_slug,
            region: row.region,
            user_id: row.user_id,
            guild_id: row.guild_id,
            level: row.level,
            class_id: row.class_id,
            race_id: row.race_id,
            guild_rank: row.guild_rank,
        }
    }
}
