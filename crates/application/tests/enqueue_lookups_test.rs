use ferrous_dnsbl_application::ports::{AddressRecordRepository, LookupStage};
use ferrous_dnsbl_application::use_cases::{EnqueueLookupsUseCase, ProcessLookupUseCase};
use ferrous_dnsbl_domain::DomainError;
use std::sync::Arc;
use std::time::Duration;

mod helpers;
use helpers::{collect_outcomes, ChannelObserver, MockAddressRecordRepository, MockBlocklistQuery};

fn build(
    query: &Arc<MockBlocklistQuery>,
    repo: &Arc<MockAddressRecordRepository>,
    observer: Arc<ChannelObserver>,
) -> EnqueueLookupsUseCase {
    let process = Arc::new(ProcessLookupUseCase::new(query.clone(), repo.clone()));
    EnqueueLookupsUseCase::new(process, observer)
}

fn addrs(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_enqueue_echoes_input() {
    let query = Arc::new(MockBlocklistQuery::new());
    let repo = Arc::new(MockAddressRecordRepository::new());
    let (observer, mut rx) = ChannelObserver::new();
    let use_case = build(&query, &repo, observer.clone());

    let accepted = use_case.execute(addrs(&["1.1.1.1", "2.2.2.2"]));

    assert_eq!(accepted, addrs(&["1.1.1.1", "2.2.2.2"]));
    assert_eq!(observer.accepted(), 2);

    collect_outcomes(&mut rx, 2).await;
    let record = repo.get_by_ip("1.1.1.1").await.unwrap();
    assert_eq!(record.ip_address.as_ref(), "1.1.1.1");
    assert!(repo.get_by_ip("2.2.2.2").await.is_ok());
}

#[tokio::test]
async fn test_enqueue_returns_before_lookups_complete() {
    let query = Arc::new(MockBlocklistQuery::new());
    query.set_delay("1.1.1.1", Duration::from_millis(200));
    let repo = Arc::new(MockAddressRecordRepository::new());
    let (observer, mut rx) = ChannelObserver::new();
    let use_case = build(&query, &repo, observer);

    let accepted = use_case.execute(addrs(&["1.1.1.1"]));

    assert_eq!(accepted.len(), 1);
    assert_eq!(
        repo.get_by_ip("1.1.1.1").await,
        Err(DomainError::NotFound("1.1.1.1".to_string()))
    );

    collect_outcomes(&mut rx, 1).await;
    assert!(repo.get_by_ip("1.1.1.1").await.is_ok());
}

#[tokio::test]
async fn test_empty_batch_does_no_work() {
    let query = Arc::new(MockBlocklistQuery::new());
    let repo = Arc::new(MockAddressRecordRepository::new());
    let (observer, _rx) = ChannelObserver::new();
    let use_case = build(&query, &repo, observer.clone());

    let accepted = use_case.execute(Vec::new());
    use_case.wait_idle().await;

    assert!(accepted.is_empty());
    assert_eq!(query.calls(), 0);
    assert_eq!(observer.accepted(), 0);
}

#[tokio::test]
async fn test_duplicates_are_kept_and_merge_into_one_record() {
    let query = Arc::new(MockBlocklistQuery::new());
    query.set_code("127.0.0.2", "127.0.0.2");
    let repo = Arc::new(MockAddressRecordRepository::new());
    let (observer, mut rx) = ChannelObserver::new();
    let use_case = build(&query, &repo, observer);

    let accepted = use_case.execute(addrs(&["127.0.0.2", "127.0.0.2", "127.0.0.2"]));

    assert_eq!(accepted.len(), 3);
    let outcomes = collect_outcomes(&mut rx, 3).await;
    let results = &outcomes["127.0.0.2"];
    assert_eq!(results.len(), 3);

    let ids: std::collections::HashSet<_> = results
        .iter()
        .map(|r| r.as_ref().unwrap().id.clone())
        .collect();
    assert_eq!(ids.len(), 1);
    assert_eq!(repo.count().await, 1);
}

#[tokio::test]
async fn test_one_failure_does_not_affect_others() {
    let query = Arc::new(MockBlocklistQuery::new());
    query.set_failing("2.2.2.2");
    query.set_code("3.3.3.3", "127.0.0.3");
    let repo = Arc::new(MockAddressRecordRepository::new());
    let (observer, mut rx) = ChannelObserver::new();
    let use_case = build(&query, &repo, observer);

    use_case.execute(addrs(&["1.1.1.1", "2.2.2.2", "3.3.3.3"]));
    let outcomes = collect_outcomes(&mut rx, 3).await;

    let failure = outcomes["2.2.2.2"][0].as_ref().unwrap_err();
    assert_eq!(failure.stage, LookupStage::Query);
    assert!(outcomes["1.1.1.1"][0].is_ok());
    assert!(outcomes["3.3.3.3"][0].is_ok());

    assert!(repo.get_by_ip("1.1.1.1").await.is_ok());
    assert_eq!(
        repo.get_by_ip("3.3.3.3").await.unwrap().response_code.as_ref(),
        "127.0.0.3"
    );
    assert!(matches!(
        repo.get_by_ip("2.2.2.2").await,
        Err(DomainError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_invalid_and_storage_failures_are_reported_per_address() {
    let query = Arc::new(MockBlocklistQuery::new());
    let repo = Arc::new(MockAddressRecordRepository::new());
    repo.set_failing("9.9.9.9");
    let (observer, mut rx) = ChannelObserver::new();
    let use_case = build(&query, &repo, observer);

    use_case.execute(addrs(&["not-an-ip", "9.9.9.9", "4.4.4.4"]));
    let outcomes = collect_outcomes(&mut rx, 3).await;

    let invalid = outcomes["not-an-ip"][0].as_ref().unwrap_err();
    assert_eq!(invalid.stage, LookupStage::Query);
    assert!(matches!(invalid.error, DomainError::InvalidAddress(_)));

    let storage = outcomes["9.9.9.9"][0].as_ref().unwrap_err();
    assert_eq!(storage.stage, LookupStage::Store);

    assert!(outcomes["4.4.4.4"][0].is_ok());
}

#[tokio::test]
async fn test_slow_address_does_not_delay_others() {
    let query = Arc::new(MockBlocklistQuery::new());
    query.set_delay("1.1.1.1", Duration::from_secs(2));
    let repo = Arc::new(MockAddressRecordRepository::new());
    let (observer, mut rx) = ChannelObserver::new();
    let use_case = build(&query, &repo, observer);

    use_case.execute(addrs(&["1.1.1.1", "2.2.2.2"]));

    let first = tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("fast lookup should finish first")
        .unwrap();
    assert_eq!(first.0, "2.2.2.2");
    assert!(repo.get_by_ip("1.1.1.1").await.is_err());

    use_case.wait_idle().await;
    assert!(repo.get_by_ip("1.1.1.1").await.is_ok());
}

#[tokio::test]
async fn test_wait_idle_settles_all_lookups() {
    let query = Arc::new(MockBlocklistQuery::new());
    let repo = Arc::new(MockAddressRecordRepository::new());
    let (observer, _rx) = ChannelObserver::new();
    let use_case = build(&query, &repo, observer);

    let batch: Vec<String> = (1..=50).map(|i| format!("10.0.0.{}", i)).collect();
    use_case.execute(batch);
    use_case.wait_idle().await;

    assert_eq!(repo.count().await, 50);
    assert_eq!(use_case.in_flight(), 0);

    use_case.execute(addrs(&["10.0.1.1"]));
    use_case.wait_idle().await;
    assert_eq!(repo.count().await, 51);
}
