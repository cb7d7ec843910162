use serde::{Deserialize, Serialize};

use crate::dnsbl::DEFAULT_ZONE;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsblConfig {
    #[serde(default = "default_zone")]
    pub zone: String,

    #[serde(default = "default_query_timeout_secs")]
    pub query_timeout_secs: u64,

    /// Nameserver IPs to query on port 53. Empty means the system resolver
    /// configuration is used.
    #[serde(default)]
    pub nameservers: Vec<String>,
}

impl Default for DnsblConfig {
    fn default() -> Self {
        Self {
            zone: default_zone(),
            query_timeout_secs: default_query_timeout_secs(),
            nameservers: Vec::new(),
        }
    }
}

fn default_zone() -> String {
    DEFAULT_ZONE.to_string()
}

fn default_query_timeout_secs() -> u64 {
    5
}
