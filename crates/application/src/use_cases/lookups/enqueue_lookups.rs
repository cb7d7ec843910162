use std::sync::Arc;
use tokio_util::task::TaskTracker;
use tracing::{debug, info};

use super::ProcessLookupUseCase;
use crate::ports::LookupObserver;

/// Accepts a batch of addresses and processes each one on its own task.
///
/// `execute` returns as soon as the tasks are spawned. Each task reports
/// exactly once to the observer; a failure for one address never touches
/// another address's task.
pub struct EnqueueLookupsUseCase {
    process: Arc<ProcessLookupUseCase>,
    observer: Arc<dyn LookupObserver>,
    tracker: TaskTracker,
}

impl EnqueueLookupsUseCase {
    pub fn new(process: Arc<ProcessLookupUseCase>, observer: Arc<dyn LookupObserver>) -> Self {
        Self {
            process,
            observer,
            tracker: TaskTracker::new(),
        }
    }

    /// Must be called from within a Tokio runtime.
    pub fn execute(&self, addresses: Vec<String>) -> Vec<String> {
        if addresses.is_empty() {
            return addresses;
        }

        self.observer.on_accepted(addresses.len());

        for address in &addresses {
            let process = Arc::clone(&self.process);
            let observer = Arc::clone(&self.observer);
            let address = address.clone();

            self.tracker.spawn(async move {
                let outcome = process.execute(&address).await;
                observer.on_complete(&address, &outcome);
            });
        }

        debug!(count = addresses.len(), "Lookups enqueued");
        addresses
    }

    pub fn in_flight(&self) -> usize {
        self.tracker.len()
    }

    /// Waits until every lookup spawned so far has completed.
    pub async fn wait_idle(&self) {
        self.tracker.close();
        self.tracker.wait().await;
        self.tracker.reopen();
    }

    /// Waits for in-flight lookups during shutdown. Lookups are never cancelled.
    pub async fn shutdown(&self) {
        let pending = self.tracker.len();
        if pending > 0 {
            info!(pending, "Waiting for in-flight lookups to finish");
        }
        self.tracker.close();
        self.tracker.wait().await;
    }
}
