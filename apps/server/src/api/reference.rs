//! Reference-data import endpoint.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use armory_core::reference::ReferenceImportSummary;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceImportRequest {
    /// User whose token authenticates the static-data fetches.
    pub user_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceImportResponse {
    pub classes: usize,
    pub races: usize,
    pub realms: usize,
}

impl From<ReferenceImportSummary> for ReferenceImportResponse {
    fn from(summary: ReferenceImportSummary) -> Self {
        Self {
            classes: summary.classes,
            races: summary.races,
            realms: summary.realms,
        }
    }
}

/// POST /api/v1/reference/import
pub async fn import_reference_data(
    State(state): State<AppState>,
    Json(request): Json<ReferenceImportRequest>,
) -> ApiResult<Json<ReferenceImportResponse>> {
    info!("Importing reference data via user '{}'", request.user_id);
    let summary = state
        .reference_service
        .import_for_user(&request.user_id)
        .await
        .map_err(ApiError::from)?;
    Ok(Json(ReferenceImportResponse::from(summary)))
}
