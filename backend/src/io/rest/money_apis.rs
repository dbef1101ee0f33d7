//! # REST API for Money Handling
//!
//! Endpoints behind the input box and the insert/refund buttons.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::{debug, info};
use uuid::Uuid;

use super::mappers::SessionMapper;
use super::store_error_response;
use crate::domain::{format_won, InsertResult, RefundResult};
use crate::AppState;
use shared::{InsertResponse, RefundResponse, SetPendingInputRequest, SetPendingInputResponse};

/// Replace the pending input with the text currently in the input box
pub async fn set_pending_input(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SetPendingInputRequest>,
) -> impl IntoResponse {
    info!("PUT /api/sessions/{}/pending-input - request: {:?}", session_id, request);

    match state
        .session_store
        .with_session(session_id, |session| session.set_pending_input(&request.raw))
        .await
    {
        Ok((accepted, stored)) => {
            let response = SetPendingInputResponse {
                accepted,
                session: SessionMapper::to_view(&stored, &state.catalog),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => store_error_response(e),
    }
}

/// Insert the pending amount
pub async fn insert_money(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> impl IntoResponse {
    info!("POST /api/sessions/{}/insert", session_id);

    let (result, stored) = match state
        .session_store
        .with_session(session_id, |session| session.insert())
        .await
    {
        Ok(outcome) => outcome,
        Err(e) => return store_error_response(e),
    };
    let session = SessionMapper::to_view(&stored, &state.catalog);

    match result {
        InsertResult::Accepted { amount } => {
            let response = InsertResponse {
                accepted: true,
                amount: Some(amount),
                formatted_amount: Some(format_won(amount)),
                hint: None,
                session,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        InsertResult::Rejected { reason } => {
            debug!("Insert rejected for session {}: {:?}", session_id, reason);
            let response = InsertResponse {
                accepted: false,
                amount: None,
                formatted_amount: None,
                hint: Some(reason.hint()),
                session,
            };
            (StatusCode::UNPROCESSABLE_ENTITY, Json(response)).into_response()
        }
    }
}

/// Hand back everything inserted
pub async fn refund_money(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> impl IntoResponse {
    info!("POST /api/sessions/{}/refund", session_id);

    let (result, stored) = match state
        .session_store
        .with_session(session_id, |session| session.refund())
        .await
    {
        Ok(outcome) => outcome,
        Err(e) => return store_error_response(e),
    };

    let status = match result {
        RefundResult::Refunded { .. } => StatusCode::OK,
        RefundResult::NothingToRefund => StatusCode::UNPROCESSABLE_ENTITY,
    };
    let response = RefundResponse {
        refunded: matches!(result, RefundResult::Refunded { .. }),
        amount: result.amount(),
        formatted_amount: format_won(result.amount()),
        hint: result.hint(),
        session: SessionMapper::to_view(&stored, &state.catalog),
    };

    (status, Json(response)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProductCatalog;
    use crate::storage::SessionStore;

    async fn setup_test_session() -> (AppState, Uuid) {
        let state = AppState::new(SessionStore::new(), ProductCatalog::default_lineup());
        let id = state.session_store.create().await.unwrap().id;
        (state, id)
    }

    fn pending(raw: &str) -> Json<SetPendingInputRequest> {
        Json(SetPendingInputRequest { raw: raw.to_string() })
    }

    #[tokio::test]
    async fn test_set_pending_input_handler() {
        let (state, id) = setup_test_session().await;

        let response = set_pending_input(State(state.clone()), Path(id), pending("12,000"))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let stored = state.session_store.get(id).await.unwrap();
        assert_eq!(stored.session.pending_input(), "12000");
    }

    #[tokio::test]
    async fn test_set_pending_input_ignores_text() {
        let (state, id) = setup_test_session().await;
        set_pending_input(State(state.clone()), Path(id), pending("500")).await;

        let response = set_pending_input(State(state.clone()), Path(id), pending("5oo"))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let stored = state.session_store.get(id).await.unwrap();
        assert_eq!(stored.session.pending_input(), "500");
    }

    #[tokio::test]
    async fn test_insert_money_handler() {
        let (state, id) = setup_test_session().await;
        set_pending_input(State(state.clone()), Path(id), pending("1500")).await;

        let response = insert_money(State(state.clone()), Path(id)).await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let stored = state.session_store.get(id).await.unwrap();
        assert_eq!(stored.session.total_inserted(), 1500);
        assert_eq!(stored.session.pending_input(), "");
    }

    #[tokio::test]
    async fn test_insert_money_without_input() {
        let (state, id) = setup_test_session().await;

        let response = insert_money(State(state.clone()), Path(id)).await.into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let stored = state.session_store.get(id).await.unwrap();
        assert!(stored.session.log().is_empty());
    }

    #[tokio::test]
    async fn test_refund_money_handler() {
        let (state, id) = setup_test_session().await;
        set_pending_input(State(state.clone()), Path(id), pending("1000")).await;
        insert_money(State(state.clone()), Path(id)).await;

        let response = refund_money(State(state.clone()), Path(id)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let response = refund_money(State(state.clone()), Path(id)).await.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let stored = state.session_store.get(id).await.unwrap();
        assert_eq!(stored.session.total_inserted(), 0);
        assert_eq!(stored.session.log().len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_session() {
        let (state, _) = setup_test_session().await;

        let response = insert_money(State(state), Path(Uuid::new_v4())).await.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
