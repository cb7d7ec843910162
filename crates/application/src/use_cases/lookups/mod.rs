pub mod enqueue_lookups;
pub mod get_address_record;
pub mod get_lookup_stats;
pub mod process_lookup;

pub use enqueue_lookups::EnqueueLookupsUseCase;
pub use get_address_record::GetAddressRecordUseCase;
pub use get_lookup_stats::GetLookupStatsUseCase;
pub use process_lookup::ProcessLookupUseCase;
