pub mod lookups;

pub use lookups::{
    EnqueueLookupsUseCase, GetAddressRecordUseCase, GetLookupStatsUseCase, ProcessLookupUseCase,
};
