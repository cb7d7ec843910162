use ferrous_dnsbl_application::ports::{LookupOutcome, LookupStage};
use ferrous_dnsbl_domain::DomainError;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupEventKind {
    Listed,
    Clean,
    InvalidAddress,
    LookupFailed,
    StorageFailed,
}

#[derive(Debug, Clone)]
pub struct LookupEvent {
    pub address: Arc<str>,

    pub kind: LookupEventKind,

    /// Response code for successes, error message for failures.
    pub detail: Arc<str>,
}

impl LookupEvent {
    pub fn from_outcome(address: &str, outcome: &LookupOutcome) -> Self {
        let (kind, detail) = match outcome {
            Ok(record) if record.is_listed() => {
                (LookupEventKind::Listed, record.response_code.clone())
            }
            Ok(record) => (LookupEventKind::Clean, record.response_code.clone()),
            Err(failure) => {
                let kind = match (&failure.stage, &failure.error) {
                    (_, DomainError::InvalidAddress(_)) => LookupEventKind::InvalidAddress,
                    (LookupStage::Query, _) => LookupEventKind::LookupFailed,
                    (LookupStage::Store, _) => LookupEventKind::StorageFailed,
                };
                (kind, Arc::from(failure.to_string().as_str()))
            }
        };

        Self {
            address: Arc::from(address),
            kind,
            detail,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.kind, LookupEventKind::Listed | LookupEventKind::Clean)
    }
}
