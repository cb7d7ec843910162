use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0} is not a valid IPv4 address")]
    InvalidAddress(String),

    #[error("Blocklist lookup for {name} failed: {reason}")]
    LookupFailed { name: String, reason: String },

    #[error("Storage failure: {0}")]
    StorageFailure(String),

    #[error("Details for ip address {0} not found")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// Expected outcomes a caller should handle rather than report as faults.
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::InvalidAddress(_))
    }
}
