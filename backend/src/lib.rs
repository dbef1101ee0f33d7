//! # Vending Machine Backend
//!
//! Non-UI logic of the vending machine.
//!
//! ```text
//! Presentation layer (input box, buttons, message box)
//!     ↓
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (transaction session, formatting, catalog)
//!     ↓
//! Storage Layer (in-memory session store)
//! ```
//!
//! The presentation layer is not part of this crate. It opens a session,
//! forwards keystrokes and button presses, and re-renders from the returned
//! [`shared::SessionView`].

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::AppConfig;
use crate::domain::ProductCatalog;
use crate::storage::SessionStore;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub session_store: SessionStore,
    pub catalog: Arc<ProductCatalog>,
}

impl AppState {
    pub fn new(session_store: SessionStore, catalog: ProductCatalog) -> Self {
        Self {
            session_store,
            catalog: Arc::new(catalog),
        }
    }
}

/// Initialize the backend with all required services
pub fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up product catalog");
    let catalog = config.catalog()?;
    info!("Loaded {} products", catalog.products().len());

    info!("Setting up session store (limit {})", config.server.max_sessions);
    Ok(AppState::new(SessionStore::with_limit(config.server.max_sessions), catalog))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, allowed_origin: &str) -> Result<Router> {
    let origin = allowed_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid allowed origin {:?}", allowed_origin))?;

    // CORS setup to allow the presentation layer to make requests
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/sessions", post(io::create_session))
        .route(
            "/sessions/:session_id",
            get(io::get_session).delete(io::delete_session),
        )
        .route("/sessions/:session_id/pending-input", put(io::set_pending_input))
        .route("/sessions/:session_id/insert", post(io::insert_money))
        .route("/sessions/:session_id/refund", post(io::refund_money))
        .route(
            "/sessions/:session_id/products/:code/select",
            post(io::select_product),
        )
        .route("/products", get(io::list_products));

    Ok(Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state))
}
