use crate::handlers;
use crate::middleware::require_basic_auth;
use crate::state::AppState;
use axum::{middleware::from_fn_with_state, routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .merge(handlers::lookups::routes())
        .merge(handlers::addresses::routes())
        .route("/stats", get(handlers::get_stats))
        .route_layer(from_fn_with_state(state.clone(), require_basic_auth))
        .route("/health", get(handlers::health_check))
        .with_state(state)
}
