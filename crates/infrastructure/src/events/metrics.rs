use super::{LookupEvent, LookupEventKind};
use ferrous_dnsbl_application::ports::{LookupStats, LookupStatsSource};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct LookupMetrics {
    accepted: Arc<AtomicU64>,

    completed: Arc<AtomicU64>,

    listed: Arc<AtomicU64>,

    clean: Arc<AtomicU64>,

    invalid_address: Arc<AtomicU64>,

    lookup_failed: Arc<AtomicU64>,

    storage_failed: Arc<AtomicU64>,
}

impl LookupMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track_accepted(&self, count: usize) {
        self.accepted.fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn track(&self, event: &LookupEvent) {
        self.completed.fetch_add(1, Ordering::Relaxed);

        let counter = match event.kind {
            LookupEventKind::Listed => &self.listed,
            LookupEventKind::Clean => &self.clean,
            LookupEventKind::InvalidAddress => &self.invalid_address,
            LookupEventKind::LookupFailed => &self.lookup_failed,
            LookupEventKind::StorageFailed => &self.storage_failed,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

impl LookupStatsSource for LookupMetrics {
    fn snapshot(&self) -> LookupStats {
        LookupStats {
            accepted: self.accepted.load(Ordering::Relaxed),
            completed: self.completed.load(Ordering::Relaxed),
            listed: self.listed.load(Ordering::Relaxed),
            clean: self.clean.load(Ordering::Relaxed),
            invalid_address: self.invalid_address.load(Ordering::Relaxed),
            lookup_failed: self.lookup_failed.load(Ordering::Relaxed),
            storage_failed: self.storage_failed.load(Ordering::Relaxed),
        }
    }
}
