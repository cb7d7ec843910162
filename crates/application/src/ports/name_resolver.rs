use async_trait::async_trait;
use std::net::IpAddr;
use thiserror::Error;

/// Outcome of a forward lookup that produced no addresses.
///
/// `NotFound` is the resolver's structured "host not found" signal (NXDOMAIN
/// or an empty answer) and is never derived from error text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameResolutionError {
    #[error("name not found")]
    NotFound,

    #[error("{0}")]
    Failed(String),
}

#[async_trait]
pub trait NameResolver: Send + Sync {
    /// Resolves `name` to its addresses, in the order the resolver returned them.
    async fn resolve(&self, name: &str) -> Result<Vec<IpAddr>, NameResolutionError>;
}
