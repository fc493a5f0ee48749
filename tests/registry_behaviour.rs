//! End-to-end registry behaviour against local raw peers.

mod helpers;

use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::time::Duration;

use fetch_status::{AddressPolicy, ErrorType, FetchConfig, FetchError, RequestId, StaticLookup};
use helpers::{poll_until_completed, registry, registry_with_config, RawServer};

const HELLO: &[u8] = b"HTTP/1.1 200 OK\r\n\r\nhello";

fn local(hosts: &[&str]) -> StaticLookup {
    hosts
        .iter()
        .fold(StaticLookup::new(), |lookup, host| lookup.with_ipv4(host, Ipv4Addr::LOCALHOST))
}

#[tokio::test]
async fn test_payload_is_byte_exact() {
    let registry = registry(local(&["flag.test"]), AddressPolicy::Unrestricted);
    let server = RawServer::instant(HELLO).await;

    let id = registry.submit(format!("http://flag.test:{}/flag", server.port()));
    poll_until_completed(&registry, 1).await;

    let outcome = registry.get(id).expect("outcome collected");
    assert_eq!(outcome.response(), Some(HELLO));
    assert_eq!(registry.stats().successes(), 1);
}

#[tokio::test]
async fn test_fast_request_completes_before_slow_one() {
    let registry = registry(local(&["a.test", "b.test"]), AddressPolicy::Unrestricted);
    let slow = RawServer::start(Duration::from_secs(2), HELLO.to_vec()).await;
    let fast = RawServer::instant(HELLO).await;

    let a = registry.submit(format!("http://a.test:{}/", slow.port()));
    let b = registry.submit(format!("http://b.test:{}/", fast.port()));
    assert_eq!((a, b), (RequestId::new(0), RequestId::new(1)));

    poll_until_completed(&registry, 2).await;
    let order: Vec<RequestId> = registry.list_completed().iter().map(|o| o.id).collect();
    assert_eq!(order, vec![b, a]);
}

#[tokio::test]
async fn test_exactly_one_outcome_per_submission() {
    let registry = registry(local(&["peer.test"]), AddressPolicy::Unrestricted);
    let mut servers = Vec::new();
    let mut submitted = Vec::new();

    for i in 0..20 {
        let id = if i % 2 == 0 {
            let server = RawServer::instant(HELLO).await;
            let id = registry.submit(format!("http://peer.test:{}/{i}", server.port()));
            servers.push(server);
            id
        } else {
            registry.submit(format!("gopher://peer.test/{i}"))
        };
        submitted.push(id);
    }

    poll_until_completed(&registry, 20).await;
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(registry.poll(), 0);

    let completed = registry.list_completed();
    assert_eq!(completed.len(), 20);
    let unique: HashSet<RequestId> = completed.iter().map(|o| o.id).collect();
    assert_eq!(unique, submitted.iter().copied().collect());
    assert_eq!(registry.stats().successes(), 10);
    assert_eq!(registry.stats().get_error_count(ErrorType::NotHttpError), 10);
}

#[tokio::test]
async fn test_poll_is_idempotent() {
    let registry = registry(StaticLookup::new(), AddressPolicy::PublicOnly);
    registry.submit("ftp://example.com/x");
    poll_until_completed(&registry, 1).await;

    let snapshot: Vec<RequestId> = registry.list_completed().iter().map(|o| o.id).collect();
    for _ in 0..3 {
        assert_eq!(registry.poll(), 0);
    }
    let again: Vec<RequestId> = registry.list_completed().iter().map(|o| o.id).collect();
    assert_eq!(snapshot, again);
    assert_eq!(registry.pending_count(), 0);
}

#[tokio::test]
async fn test_oversized_response_is_isolated() {
    let config = FetchConfig {
        io_timeout: Duration::from_secs(5),
        max_response_bytes: 32 * 1024,
        address_policy: AddressPolicy::Unrestricted,
        ..Default::default()
    };
    let registry = registry_with_config(local(&["big.test", "small.test"]), config);

    let mut bomb = b"HTTP/1.1 200 OK\r\n\r\n".to_vec();
    bomb.resize(1024 * 1024, b'x');
    let big = RawServer::instant(&bomb).await;
    let smalls = [
        RawServer::instant(HELLO).await,
        RawServer::start(Duration::from_millis(300), HELLO.to_vec()).await,
        RawServer::instant(HELLO).await,
    ];

    let big_id = registry.submit(format!("http://big.test:{}/", big.port()));
    let small_ids: Vec<RequestId> = smalls
        .iter()
        .map(|s| registry.submit(format!("http://small.test:{}/", s.port())))
        .collect();

    poll_until_completed(&registry, 4).await;

    let big_outcome = registry.get(big_id).expect("big outcome");
    match big_outcome.error() {
        Some(FetchError::ResponseTooLarge { limit }) => assert_eq!(*limit, 32 * 1024),
        other => panic!("expected ResponseTooLarge, got {other:?}"),
    }
    for id in small_ids {
        assert_eq!(registry.get(id).expect("small outcome").response(), Some(HELLO));
    }
}

#[tokio::test]
async fn test_timeout_fails_only_the_stalled_request() {
    let config = FetchConfig {
        io_timeout: Duration::from_millis(300),
        address_policy: AddressPolicy::Unrestricted,
        ..Default::default()
    };
    let registry = registry_with_config(local(&["stall.test", "ok.test"]), config);
    let stalled = RawServer::start(Duration::from_secs(5), HELLO.to_vec()).await;
    let healthy = RawServer::instant(HELLO).await;

    let stalled_id = registry.submit(format!("http://stall.test:{}/", stalled.port()));
    let healthy_id = registry.submit(format!("http://ok.test:{}/", healthy.port()));
    poll_until_completed(&registry, 2).await;

    assert!(registry.get(healthy_id).expect("healthy").is_success());
    let stalled_outcome = registry.get(stalled_id).expect("stalled");
    assert!(stalled_outcome.error().is_some());
    assert_eq!(registry.stats().get_error_count(ErrorType::IoTimeoutError), 1);
}
