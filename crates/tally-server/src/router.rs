use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with all ledger endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handler::list_chain))
        .route("/create", post(handler::create_participant))
        .route("/create/", post(handler::create_participant))
        .route("/transact", post(handler::transact))
        .route("/transact/", post(handler::transact))
        .route("/validate", get(handler::validate_chain))
        .route("/v1/health", get(handler::health_handler))
        .route("/v1/info", get(handler::info_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
