use super::Repositories;
use ferrous_dnsbl_application::services::DnsblQueryService;
use ferrous_dnsbl_application::use_cases::{
    EnqueueLookupsUseCase, GetAddressRecordUseCase, GetLookupStatsUseCase, ProcessLookupUseCase,
};
use ferrous_dnsbl_domain::{Config, DomainError};
use ferrous_dnsbl_infrastructure::dns::HickoryNameResolver;
use ferrous_dnsbl_infrastructure::events::{LookupEventEmitter, LookupMetrics};
use std::sync::Arc;

pub struct UseCases {
    pub enqueue_lookups: Arc<EnqueueLookupsUseCase>,
    pub get_address_record: Arc<GetAddressRecordUseCase>,
    pub get_lookup_stats: Arc<GetLookupStatsUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, repos: &Repositories) -> Result<Self, DomainError> {
        let resolver = Arc::new(HickoryNameResolver::new(&config.dnsbl)?);
        let blocklist = Arc::new(DnsblQueryService::new(
            resolver,
            config.dnsbl.zone.as_str(),
        ));

        let metrics = LookupMetrics::new();
        let emitter = Arc::new(LookupEventEmitter::new(metrics.clone()));

        let process = Arc::new(ProcessLookupUseCase::new(
            blocklist,
            repos.address_record.clone(),
        ));

        Ok(Self {
            enqueue_lookups: Arc::new(EnqueueLookupsUseCase::new(process, emitter)),
            get_address_record: Arc::new(GetAddressRecordUseCase::new(
                repos.address_record.clone(),
            )),
            get_lookup_stats: Arc::new(GetLookupStatsUseCase::new(Arc::new(metrics))),
        })
    }
}
