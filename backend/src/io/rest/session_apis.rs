//! # REST API for Session Lifecycle
//!
//! A presentation layer opens a session when it mounts and deletes it on
//! teardown.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;
use uuid::Uuid;

use super::mappers::SessionMapper;
use super::store_error_response;
use crate::AppState;

/// Open a new session
pub async fn create_session(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/sessions");

    match state.session_store.create().await {
        Ok(stored) => {
            (StatusCode::CREATED, Json(SessionMapper::to_view(&stored, &state.catalog)))
                .into_response()
        }
        Err(e) => store_error_response(e),
    }
}

/// Current state of a session
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> impl IntoResponse {
    info!("GET /api/sessions/{}", session_id);

    match state.session_store.get(session_id).await {
        Ok(stored) => {
            (StatusCode::OK, Json(SessionMapper::to_view(&stored, &state.catalog))).into_response()
        }
        Err(e) => store_error_response(e),
    }
}

/// Tear a session down
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> impl IntoResponse {
    info!("DELETE /api/sessions/{}", session_id);

    match state.session_store.remove(session_id).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => store_error_response(e),
    }
}
