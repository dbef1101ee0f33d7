//! # REST API Interface Layer
//!
//! HTTP endpoints for the vending machine. Rejected session operations are
//! answered with `422 Unprocessable Entity` and a body carrying the hint and
//! the unchanged session view; unknown sessions and products are `404`. Opening
//! a session past the configured limit is `503`.

pub mod mappers;
pub mod money_apis;
pub mod product_apis;
pub mod session_apis;

pub use money_apis::*;
pub use product_apis::*;
pub use session_apis::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::storage::StoreError;

/// Translate a store error into an HTTP response
pub(crate) fn store_error_response(error: StoreError) -> Response {
    match error {
        StoreError::SessionNotFound(_) => {
            warn!("{}", error);
            (StatusCode::NOT_FOUND, "Session not found").into_response()
        }
        StoreError::TooManySessions(_) => {
            warn!("{}", error);
            (StatusCode::SERVICE_UNAVAILABLE, "Too many open sessions").into_response()
        }
    }
}
