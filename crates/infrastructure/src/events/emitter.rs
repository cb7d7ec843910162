use super::{LookupEvent, LookupEventKind, LookupMetrics};
use ferrous_dnsbl_application::ports::{LookupObserver, LookupOutcome};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Observability sink for background lookups: logs each outcome, counts it,
/// and forwards it to a subscriber when one was requested.
#[derive(Clone)]
pub struct LookupEventEmitter {
    metrics: LookupMetrics,
    sender: Option<mpsc::UnboundedSender<LookupEvent>>,
}

impl LookupEventEmitter {
    pub fn new(metrics: LookupMetrics) -> Self {
        Self {
            metrics,
            sender: None,
        }
    }

    pub fn new_enabled(metrics: LookupMetrics) -> (Self, mpsc::UnboundedReceiver<LookupEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let emitter = Self {
            metrics,
            sender: Some(tx),
        };
        (emitter, rx)
    }

    pub fn metrics(&self) -> &LookupMetrics {
        &self.metrics
    }

    pub fn is_enabled(&self) -> bool {
        self.sender.is_some()
    }

    fn log(event: &LookupEvent) {
        if !event.is_success() {
            warn!(
                address = %event.address,
                kind = ?event.kind,
                error = %event.detail,
                "Lookup failed"
            );
            return;
        }

        if event.kind == LookupEventKind::Listed {
            info!(
                address = %event.address,
                codes = %event.detail,
                "Address is listed"
            );
        } else {
            debug!(address = %event.address, "Address is not listed");
        }
    }
}

impl LookupObserver for LookupEventEmitter {
    fn on_accepted(&self, count: usize) {
        self.metrics.track_accepted(count);
    }

    fn on_complete(&self, address: &str, outcome: &LookupOutcome) {
        let event = LookupEvent::from_outcome(address, outcome);
        Self::log(&event);
        self.metrics.track(&event);

        if let Some(ref tx) = self.sender {
            let _ = tx.send(event);
        }
    }
}

impl Default for LookupEventEmitter {
    fn default() -> Self {
        Self::new(LookupMetrics::new())
    }
}

impl std::fmt::Debug for LookupEventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupEventEmitter")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
