use ferrous_dnsbl_application::use_cases::{
    EnqueueLookupsUseCase, GetAddressRecordUseCase, GetLookupStatsUseCase,
};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub enqueue_lookups: Arc<EnqueueLookupsUseCase>,
    pub get_address_record: Arc<GetAddressRecordUseCase>,
    pub get_lookup_stats: Arc<GetLookupStatsUseCase>,
    /// Basic auth username to password. Empty disables authentication.
    pub credentials: Arc<HashMap<String, String>>,
}
