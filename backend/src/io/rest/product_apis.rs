//! # REST API for Products
//!
//! Lists the lineup and handles product button presses.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::mappers::{ProductMapper, SessionMapper};
use super::store_error_response;
use crate::domain::{format_currency, SelectResult};
use crate::AppState;
use shared::{ProductListResponse, SelectProductResponse};

/// List every product button
pub async fn list_products(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/products");

    let products = state
        .catalog
        .products()
        .iter()
        .map(ProductMapper::to_dto)
        .collect();
    (StatusCode::OK, Json(ProductListResponse { products }))
}

/// Buy a product with the money inserted into a session
pub async fn select_product(
    State(state): State<AppState>,
    Path((session_id, code)): Path<(Uuid, String)>,
) -> impl IntoResponse {
    info!("POST /api/sessions/{}/products/{}/select", session_id, code);

    let Some(product) = state.catalog.find(&code).cloned() else {
        warn!("Unknown product code {}", code);
        return (StatusCode::NOT_FOUND, "Product not found").into_response();
    };

    let (result, stored) = match state
        .session_store
        .with_session(session_id, |session| session.dispense(&product))
        .await
    {
        Ok(outcome) => outcome,
        Err(e) => return store_error_response(e),
    };

    let status = match result {
        SelectResult::Dispensed { .. } => StatusCode::OK,
        SelectResult::InsufficientFunds { .. } => {
            debug!("Insufficient funds for {} in session {}", product.code, session_id);
            StatusCode::UNPROCESSABLE_ENTITY
        }
    };
    let response = SelectProductResponse {
        dispensed: matches!(result, SelectResult::Dispensed { .. }),
        product: ProductMapper::to_dto(&product),
        remaining: result.remaining(),
        formatted_remaining: format_currency(result.remaining()),
        hint: result.hint(),
        session: SessionMapper::to_view(&stored, &state.catalog),
    };

    (status, Json(response)).into_response()
}
