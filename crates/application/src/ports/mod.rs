mod address_record_repository;
mod blocklist_query;
mod lookup_observer;
mod lookup_stats;
mod name_resolver;

pub use address_record_repository::AddressRecordRepository;
pub use blocklist_query::BlocklistQuery;
pub use lookup_observer::{LookupFailure, LookupObserver, LookupOutcome, LookupStage};
pub use lookup_stats::{LookupStats, LookupStatsSource};
pub use name_resolver::{NameResolutionError, NameResolver};
