#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use ferrous_dnsbl_application::ports::{
    AddressRecordRepository, BlocklistQuery, LookupObserver, LookupOutcome, NameResolutionError,
    NameResolver,
};
use ferrous_dnsbl_domain::{AddressRecord, DomainError};
use std::collections::{HashMap, HashSet};
use std::net::IpAddr;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Clone, Default)]
pub struct MockNameResolver {
    answers: Arc<Mutex<HashMap<String, Result<Vec<IpAddr>, NameResolutionError>>>>,
    queried: Arc<Mutex<Vec<String>>>,
}

impl MockNameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_answer(&self, name: &str, addresses: &[&str]) {
        let parsed = addresses.iter().map(|a| a.parse().unwrap()).collect();
        self.answers
            .lock()
            .unwrap()
            .insert(name.to_string(), Ok(parsed));
    }

    pub fn set_error(&self, name: &str, error: NameResolutionError) {
        self.answers
            .lock()
            .unwrap()
            .insert(name.to_string(), Err(error));
    }

    pub fn queried(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }
}

#[async_trait]
impl NameResolver for MockNameResolver {
    async fn resolve(&self, name: &str) -> Result<Vec<IpAddr>, NameResolutionError> {
        self.queried.lock().unwrap().push(name.to_string());
        self.answers
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .unwrap_or(Err(NameResolutionError::NotFound))
    }
}

/// Answers by address; unknown addresses are clean.
#[derive(Clone, Default)]
pub struct MockBlocklistQuery {
    codes: Arc<Mutex<HashMap<String, String>>>,
    failing: Arc<Mutex<HashSet<String>>>,
    delay: Arc<Mutex<HashMap<String, Duration>>>,
    calls: Arc<AtomicUsize>,
}

impl MockBlocklistQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_code(&self, address: &str, code: &str) {
        self.codes
            .lock()
            .unwrap()
            .insert(address.to_string(), code.to_string());
    }

    pub fn set_failing(&self, address: &str) {
        self.failing.lock().unwrap().insert(address.to_string());
    }

    pub fn set_delay(&self, address: &str, delay: Duration) {
        self.delay
            .lock()
            .unwrap()
            .insert(address.to_string(), delay);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BlocklistQuery for MockBlocklistQuery {
    async fn query(&self, address: &str) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let delay = self.delay.lock().unwrap().get(address).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if address.parse::<std::net::Ipv4Addr>().is_err() {
            return Err(DomainError::InvalidAddress(address.to_string()));
        }

        if self.failing.lock().unwrap().contains(address) {
            return Err(DomainError::LookupFailed {
                name: address.to_string(),
                reason: "mock resolver timeout".to_string(),
            });
        }

        Ok(self
            .codes
            .lock()
            .unwrap()
            .get(address)
            .cloned()
            .unwrap_or_default())
    }
}

/// In-memory store; the mutex plays the part of the write-exclusive transaction.
#[derive(Clone, Default)]
pub struct MockAddressRecordRepository {
    records: Arc<tokio::sync::Mutex<HashMap<String, AddressRecord>>>,
    failing: Arc<Mutex<HashSet<String>>>,
    next_id: Arc<AtomicU64>,
}

impl MockAddressRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, address: &str) {
        self.failing.lock().unwrap().insert(address.to_string());
    }

    pub async fn count(&self) -> usize {
        self.records.lock().await.len()
    }
}

#[async_trait]
impl AddressRecordRepository for MockAddressRecordRepository {
    async fn upsert(
        &self,
        ip_address: &str,
        response_code: &str,
    ) -> Result<AddressRecord, DomainError> {
        if self.failing.lock().unwrap().contains(ip_address) {
            return Err(DomainError::StorageFailure("mock disk full".to_string()));
        }

        let mut records = self.records.lock().await;
        let now = Utc::now();
        let record = match records.get(ip_address).cloned() {
            Some(existing) => existing.refreshed(response_code, now),
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                AddressRecord::new(format!("mock-{}", id), ip_address, response_code, now)
            }
        };
        records.insert(ip_address.to_string(), record.clone());
        Ok(record)
    }

    async fn get_by_ip(&self, ip_address: &str) -> Result<AddressRecord, DomainError> {
        self.records
            .lock()
            .await
            .get(ip_address)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(ip_address.to_string()))
    }
}

/// Forwards every completion to a channel so tests can await them.
pub struct ChannelObserver {
    sender: mpsc::UnboundedSender<(String, LookupOutcome)>,
    accepted: AtomicUsize,
}

impl ChannelObserver {
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<(String, LookupOutcome)>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (
            Arc::new(Self {
                sender,
                accepted: AtomicUsize::new(0),
            }),
            receiver,
        )
    }

    pub fn accepted(&self) -> usize {
        self.accepted.load(Ordering::SeqCst)
    }
}

impl LookupObserver for ChannelObserver {
    fn on_accepted(&self, count: usize) {
        self.accepted.fetch_add(count, Ordering::SeqCst);
    }

    fn on_complete(&self, address: &str, outcome: &LookupOutcome) {
        let _ = self.sender.send((address.to_string(), outcome.clone()));
    }
}

pub async fn collect_outcomes(
    receiver: &mut mpsc::UnboundedReceiver<(String, LookupOutcome)>,
    count: usize,
) -> HashMap<String, Vec<LookupOutcome>> {
    let mut outcomes: HashMap<String, Vec<LookupOutcome>> = HashMap::new();
    for _ in 0..count {
        let (address, outcome) = tokio::time::timeout(Duration::from_secs(5), receiver.recv())
            .await
            .expect("timed out waiting for lookup outcome")
            .expect("observer channel closed");
        outcomes.entry(address).or_default().push(outcome);
    }
    outcomes
}
