//! Roster reconciliation endpoints.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use tracing::info;

use armory_core::characters::Character;
use armory_core::reconcile::ReconcileSummary;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileResponse {
    pub user_id: String,
    pub battle_tag: String,
    pub characters_synced: usize,
}

impl From<ReconcileSummary> for ReconcileResponse {
    fn from(summary: ReconcileSummary) -> Self {
        Self {
            user_id: summary.user_id,
            battle_tag: summary.battle_tag,
            characters_synced: summary.characters_synced,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterResponse {
    pub id: String,
    pub name: String,
    pub realm_slug: String,
    pub region: String,
    pub guild_id: Option<String>,
    pub level: i32,
    pub class_id: i32,
    pub race_id: i32,
    pub guild_rank: Option<i32>,
}

impl From<Character> for CharacterResponse {
    fn from(character: Character) -> Self {
        Self {
            id: character.id,
            name: character.name,
            realm_slug: character.realm_slug,
            region: character.region,
            guild_id: character.guild_id,
            level: character.level,
            class_id: character.class_id,
            race_id: character.race_id,
            guild_rank: character.guild_rank,
        }
    }
}

/// POST /api/v1/users/{user_id}/reconcile
pub async fn reconcile_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<ReconcileResponse>> {
    info!("Reconciling roster for user '{user_id}'");
    let summary = state
        .reconcile_service
        .reconcile(&user_id)
        .await
        .map_err(ApiError::from)?;
    Ok(Json(ReconcileResponse::from(summary)))
}

/// GET /api/v1/users/{user_id}/characters
pub async fn list_characters(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<CharacterResponse>>> {
    let characters = state
        .character_repository
        .list_by_owner(&user_id)
        .map_err(ApiError::from)?;
    Ok(Json(
        characters.into_iter().map(CharacterResponse::from).collect(),
    ))
}
