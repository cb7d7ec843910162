use chrono::{DateTime, Utc};
use ferrous_dnsbl_domain::AddressRecord;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AddressRecordResponse {
    pub uuid: String,
    pub ip_address: String,
    pub response_code: String,
    pub response_codes: Vec<String>,
    pub listed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AddressRecordResponse {
    pub fn from_record(r: AddressRecord) -> Self {
        Self {
            listed: r.is_listed(),
            response_codes: r.response_codes().map(str::to_string).collect(),
            uuid: r.id.to_string(),
            ip_address: r.ip_address.to_string(),
            response_code: r.response_code.to_string(),
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}
