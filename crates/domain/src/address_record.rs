use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The stored outcome of the latest blocklist lookup for one IP address.
///
/// `id` and `created_at` are fixed when the address is first recorded;
/// later lookups only move `response_code` and `updated_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub id: Arc<str>,
    pub ip_address: Arc<str>,
    pub response_code: Arc<str>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AddressRecord {
    pub fn new(
        id: impl Into<Arc<str>>,
        ip_address: impl Into<Arc<str>>,
        response_code: impl Into<Arc<str>>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            ip_address: ip_address.into(),
            response_code: response_code.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Merges a newer lookup result into this record, keeping its identity.
    pub fn refreshed(self, response_code: impl Into<Arc<str>>, now: DateTime<Utc>) -> Self {
        Self {
            response_code: response_code.into(),
            updated_at: now,
            ..self
        }
    }

    /// An empty response code means the address was queried and is not listed.
    pub fn is_listed(&self) -> bool {
        !self.response_code.is_empty()
    }

    pub fn response_codes(&self) -> impl Iterator<Item = &str> {
        self.response_code.split(',').filter(|c| !c.is_empty())
    }
}
