//! Ferrous DNSBL Domain Layer
pub mod address_record;
pub mod config;
pub mod dnsbl;
pub mod errors;

pub use address_record::AddressRecord;
pub use config::{CliOverrides, Config};
pub use errors::DomainError;
