use armory_core::reference::{PlayableClass, PlayableRace, RealmInfo};
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
#[diesel(table_name = crate::schema::playable_classes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PlayableClassDB {
    pub id: i32,
    pub name: String,
}

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
#[diesel(table_name = crate::schema::playable_races)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PlayableRaceDB {
    pub id: i32,
    pub name: String,
}

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
#[diesel(table_name = crate::schema::realms)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RealmDB {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub region: String,
}

impl From<PlayableClass> for PlayableClassDB {
    fn from(class: PlayableClass) -> Self {
        Self {
            id: class.id,
            name: class.name,
        }
    }
}

impl From<PlayableRace> for PlayableRaceDB {
    fn from(race: PlayableRace) -> Self {
        Self {
            id: race.id,
            name: race.name,
        }
    }
}

impl From<RealmInfo> for RealmDB {
    fn from(realm: RealmInfo) -> Self {
        Self {
            id: realm.id,
            name: realm.name,
            slug: realm.slug,
            region: realm.region,
        }
    }
}
