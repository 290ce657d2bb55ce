//! HTTP routes.

mod reconcile;
mod reference;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/v1/users/{user_id}/reconcile",
            post(reconcile::reconcile_user),
        )
        .route(
            "/api/v1/users/{user_id}/characters",
            get(reconcile::list_characters),
        )
        .route(
            "/api/v1/reference/import",
            post(reference::import_reference_data),
        )
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
