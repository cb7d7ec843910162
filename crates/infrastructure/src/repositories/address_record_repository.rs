use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use ferrous_dnsbl_application::ports::AddressRecordRepository;
use ferrous_dnsbl_domain::{AddressRecord, DomainError};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{debug, error, instrument};
use uuid::Uuid;

type AddressRecordRow = (String, String, String, String, String);

const SELECT_BY_IP: &str = "SELECT id, created_at, updated_at, response_code, ip_address
     FROM address_records WHERE ip_address = ? LIMIT 1";

/// SQLite-backed address record store.
///
/// Upserts run in a `BEGIN IMMEDIATE` transaction: the write lock is taken
/// before the existing record is read, so two writers for the same address
/// cannot both see "no record" and insert twice. Waiting writers block on
/// the pool's busy timeout.
pub struct SqliteAddressRecordRepository {
    pool: SqlitePool,
}

impl SqliteAddressRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: AddressRecordRow) -> Result<AddressRecord, DomainError> {
        let (id, created_at, updated_at, response_code, ip_address) = row;
        Ok(AddressRecord {
            id: Arc::from(id.as_str()),
            ip_address: Arc::from(ip_address.as_str()),
            response_code: Arc::from(response_code.as_str()),
            created_at: parse_timestamp(&created_at)?,
            updated_at: parse_timestamp(&updated_at)?,
        })
    }
}

/// Sub-second digits kept in storage.
const TIMESTAMP_DIGITS: u16 = 6;

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, DomainError> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| {
            error!(error = %e, value = %value, "Stored timestamp is not RFC 3339");
            DomainError::StorageFailure(format!("invalid timestamp '{}': {}", value, e))
        })
}

fn storage_error(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| {
        error!(error = %e, "{}", context);
        DomainError::StorageFailure(format!("{}: {}", context, e))
    }
}

#[async_trait]
impl AddressRecordRepository for SqliteAddressRecordRepository {
    #[instrument(skip(self))]
    async fn upsert(
        &self,
        ip_address: &str,
        response_code: &str,
    ) -> Result<AddressRecord, DomainError> {
        let mut tx = self
            .pool
            .begin_with("BEGIN IMMEDIATE")
            .await
            .map_err(storage_error("Failed to begin upsert transaction"))?;

        // Any early return drops `tx`, which rolls it back.
        let existing = sqlx::query_as::<_, AddressRecordRow>(SELECT_BY_IP)
            .bind(ip_address)
            .fetch_optional(&mut *tx)
            .await
            .map_err(storage_error("Failed to check for existing record"))?;

        // The returned record must equal what a later read yields.
        let now = Utc::now().trunc_subsecs(TIMESTAMP_DIGITS);
        let record = match existing {
            Some(row) => Self::row_to_record(row)?.refreshed(response_code, now),
            None => AddressRecord::new(
                Uuid::new_v4().to_string(),
                ip_address,
                response_code,
                now,
            ),
        };

        sqlx::query(
            "INSERT OR REPLACE INTO address_records (id, created_at, updated_at, response_code, ip_address)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(record.id.as_ref())
        .bind(format_timestamp(&record.created_at))
        .bind(format_timestamp(&record.updated_at))
        .bind(record.response_code.as_ref())
        .bind(record.ip_address.as_ref())
        .execute(&mut *tx)
        .await
        .map_err(storage_error("Failed to write address record"))?;

        tx.commit()
            .await
            .map_err(storage_error("Failed to commit upsert transaction"))?;

        debug!(id = %record.id, "Address record upserted");
        Ok(record)
    }

    #[instrument(skip(self))]
    async fn get_by_ip(&self, ip_address: &str) -> Result<AddressRecord, DomainError> {
        let row = sqlx::query_as::<_, AddressRecordRow>(SELECT_BY_IP)
            .bind(ip_address)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error("Failed to query address record"))?;

        match row {
            Some(row) => Self::row_to_record(row),
            None => Err(DomainError::NotFound(ip_address.to_string())),
        }
    }
}
