use ferrous_dnsbl_application::ports::LookupStats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LookupStatsResponse {
    #[serde(flatten)]
    pub counters: LookupStats,
    pub failed: u64,
    pub in_flight: u64,
}

impl LookupStatsResponse {
    pub fn from_stats(stats: LookupStats) -> Self {
        Self {
            failed: stats.failed(),
            in_flight: stats.in_flight(),
            counters: stats,
        }
    }
}
