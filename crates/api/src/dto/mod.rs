pub mod address_record;
pub mod lookup;
pub mod stats;

pub use address_record::AddressRecordResponse;
pub use lookup::{LookupAccepted, LookupRequest};
pub use stats::LookupStatsResponse;
