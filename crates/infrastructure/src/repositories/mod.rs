pub mod address_record_repository;

pub use address_record_repository::SqliteAddressRecordRepository;
