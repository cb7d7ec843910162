use ferrous_dnsbl_domain::{AddressRecord, DomainError};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::AddressRecordRepository;

pub struct GetAddressRecordUseCase {
    repo: Arc<dyn AddressRecordRepository>,
}

impl GetAddressRecordUseCase {
    pub fn new(repo: Arc<dyn AddressRecordRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, ip_address: &str) -> Result<AddressRecord, DomainError> {
        self.repo.get_by_ip(ip_address).await
    }
}
