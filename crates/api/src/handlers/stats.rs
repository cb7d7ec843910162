use axum::{extract::State, Json};

use crate::{dto::LookupStatsResponse, state::AppState};

pub async fn get_stats(State(state): State<AppState>) -> Json<LookupStatsResponse> {
    Json(LookupStatsResponse::from_stats(state.get_lookup_stats.execute()))
}
