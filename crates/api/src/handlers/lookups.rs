use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use tracing::info;

use crate::{
    dto::{LookupAccepted, LookupRequest},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/lookups", post(enqueue_lookups))
}

/// Accepts the batch and answers before any lookup has run. Per-address
/// outcomes are only visible in the logs and in the stored records.
async fn enqueue_lookups(
    State(state): State<AppState>,
    Json(req): Json<LookupRequest>,
) -> (StatusCode, Json<LookupAccepted>) {
    let queued_ips = state.enqueue_lookups.execute(req.ips);
    info!(count = queued_ips.len(), "Lookup batch accepted");
    (StatusCode::ACCEPTED, Json(LookupAccepted { queued_ips }))
}
