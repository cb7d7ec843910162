use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use ferrous_dnsbl_domain::dnsbl::parse_ipv4;
use tracing::debug;

use crate::{dto::AddressRecordResponse, errors::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/addresses/{ip}", get(get_address_record))
}

async fn get_address_record(
    State(state): State<AppState>,
    Path(ip): Path<String>,
) -> Result<Json<AddressRecordResponse>, ApiError> {
    parse_ipv4(&ip)?;

    let record = state.get_address_record.execute(&ip).await?;
    debug!(ip = %ip, code = %record.response_code, "Address record retrieved");
    Ok(Json(AddressRecordResponse::from_record(record)))
}
