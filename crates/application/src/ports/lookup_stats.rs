use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LookupStats {
    pub accepted: u64,
    pub completed: u64,
    pub listed: u64,
    pub clean: u64,
    pub invalid_address: u64,
    pub lookup_failed: u64,
    pub storage_failed: u64,
}

impl LookupStats {
    pub fn failed(&self) -> u64 {
        self.invalid_address + self.lookup_failed + self.storage_failed
    }

    pub fn in_flight(&self) -> u64 {
        self.accepted.saturating_sub(self.completed)
    }
}

pub trait LookupStatsSource: Send + Sync {
    fn snapshot(&self) -> LookupStats;
}
