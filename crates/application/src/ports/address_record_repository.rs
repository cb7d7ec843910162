use async_trait::async_trait;
use ferrous_dnsbl_domain::{AddressRecord, DomainError};

#[async_trait]
pub trait AddressRecordRepository: Send + Sync {
    /// Records `response_code` for `ip_address`, merging into the existing
    /// record when there is one. Concurrent calls for the same address must
    /// converge on a single record.
    async fn upsert(
        &self,
        ip_address: &str,
        response_code: &str,
    ) -> Result<AddressRecord, DomainError>;

    /// Fails with `DomainError::NotFound` when the address was never recorded.
    async fn get_by_ip(&self, ip_address: &str) -> Result<AddressRecord, DomainError>;
}
