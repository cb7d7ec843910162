use async_trait::async_trait;
use ferrous_dnsbl_domain::{dnsbl, DomainError};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::{BlocklistQuery, NameResolutionError, NameResolver};

/// Checks an IPv4 address against a single DNSBL zone.
///
/// Holds no state besides its resolver and zone, so one instance is shared by
/// every concurrent lookup.
pub struct DnsblQueryService {
    resolver: Arc<dyn NameResolver>,
    zone: Arc<str>,
}

impl DnsblQueryService {
    pub fn new(resolver: Arc<dyn NameResolver>, zone: impl Into<Arc<str>>) -> Self {
        Self {
            resolver,
            zone: zone.into(),
        }
    }
}

#[async_trait]
impl BlocklistQuery for DnsblQueryService {
    #[instrument(skip(self), fields(zone = %self.zone))]
    async fn query(&self, address: &str) -> Result<String, DomainError> {
        let name = dnsbl::query_name(address, &self.zone)?;

        match self.resolver.resolve(&name).await {
            Ok(addresses) => {
                let codes = dnsbl::join_response_codes(&addresses);
                debug!(name = %name, codes = %codes, "DNSBL answer");
                Ok(codes)
            }
            Err(NameResolutionError::NotFound) => {
                debug!(name = %name, "Address not listed");
                Ok(String::new())
            }
            Err(NameResolutionError::Failed(reason)) => {
                Err(DomainError::LookupFailed { name, reason })
            }
        }
    }
}
