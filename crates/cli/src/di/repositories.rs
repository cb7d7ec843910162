use ferrous_dnsbl_infrastructure::repositories::SqliteAddressRecordRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub address_record: Arc<SqliteAddressRecordRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            address_record: Arc::new(SqliteAddressRecordRepository::new(pool)),
        }
    }
}
