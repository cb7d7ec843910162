use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct LookupRequest {
    pub ips: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LookupAccepted {
    pub queued_ips: Vec<String>,
}
