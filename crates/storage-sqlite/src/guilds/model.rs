use armory_core::guilds::Guild;
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
#[diesel(table_name = crate::schema::guilds)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GuildDB {
    pub id: String,
    pub name: String,
    pub realm_slug: String,
    pub region: String,
    pub faction: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<GuildDB> for Guild {
    fn from(row: GuildDB) -> Self {
        Guild {
            id: row.id,
            name: row.name,
            realm_slug: row.realm_slug,
            region: row.region,
            faction: row.faction,
        }
    }
}
