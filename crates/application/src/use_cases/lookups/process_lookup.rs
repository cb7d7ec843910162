use std::sync::Arc;
use tracing::instrument;

use crate::ports::{AddressRecordRepository, BlocklistQuery, LookupFailure, LookupOutcome};

/// Queries the blocklist for one address and stores the answer.
/// Nothing is written unless the query succeeded.
pub struct ProcessLookupUseCase {
    blocklist: Arc<dyn BlocklistQuery>,
    repo: Arc<dyn AddressRecordRepository>,
}

impl ProcessLookupUseCase {
    pub fn new(blocklist: Arc<dyn BlocklistQuery>, repo: Arc<dyn AddressRecordRepository>) -> Self {
        Self { blocklist, repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, address: &str) -> LookupOutcome {
        let response_code = self
            .blocklist
            .query(address)
            .await
            .map_err(LookupFailure::query)?;

        self.repo
            .upsert(address, &response_code)
            .await
            .map_err(LookupFailure::store)
    }
}
