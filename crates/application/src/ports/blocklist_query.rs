use async_trait::async_trait;
use ferrous_dnsbl_domain::DomainError;

#[async_trait]
pub trait BlocklistQuery: Send + Sync {
    /// Returns the comma-joined listing codes for `address`, or an empty
    /// string when the address is not listed.
    async fn query(&self, address: &str) -> Result<String, DomainError>;
}
