use ferrous_dnsbl_domain::{AddressRecord, DomainError};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupStage {
    Query,
    Store,
}

impl fmt::Display for LookupStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupStage::Query => f.write_str("query"),
            LookupStage::Store => f.write_str("store"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupFailure {
    pub stage: LookupStage,
    pub error: DomainError,
}

impl LookupFailure {
    pub fn query(error: DomainError) -> Self {
        Self {
            stage: LookupStage::Query,
            error,
        }
    }

    pub fn store(error: DomainError) -> Self {
        Self {
            stage: LookupStage::Store,
            error,
        }
    }
}

impl fmt::Display for LookupFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.stage, self.error)
    }
}

pub type LookupOutcome = Result<AddressRecord, LookupFailure>;

/// Receives the completion of every background lookup, one call per address.
pub trait LookupObserver: Send + Sync {
    fn on_accepted(&self, _count: usize) {}

    fn on_complete(&self, address: &str, outcome: &LookupOutcome);
}
