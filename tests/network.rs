//! Tests against the public internet.
//!
//! Run with: `cargo test --test network -- --ignored`

use std::time::{Duration, Instant};

use fetch_status::initialization::init_fetch_context;
use fetch_status::{FetchConfig, RequestRegistry};
use tokio::runtime::Handle;

#[tokio::test]
#[ignore]
async fn test_fetch_example_com() {
    let ctx = init_fetch_context(&FetchConfig::default()).expect("default config");
    let registry = RequestRegistry::new(ctx, Handle::current());
    let id = registry.submit("http://example.com/");

    let deadline = Instant::now() + Duration::from_secs(30);
    while registry.get(id).is_none() {
        assert!(Instant::now() < deadline, "fetch did not finish");
        registry.poll();
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    let outcome = registry.get(id).expect("outcome");
    let response = outcome.response().expect("example.com should answer");
    assert!(response.starts_with(b"HTTP/1."), "unexpected response start");
}

#[tokio::test]
#[ignore]
async fn test_localhost_name_is_rejected() {
    let ctx = init_fetch_context(&FetchConfig::default()).expect("default config");
    let registry = RequestRegistry::new(ctx, Handle::current());
    let id = registry.submit("http://localhost/");

    let deadline = Instant::now() + Duration::from_secs(30);
    while registry.get(id).is_none() {
        assert!(Instant::now() < deadline, "resolution did not finish");
        registry.poll();
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    let outcome = registry.get(id).expect("outcome");
    assert_eq!(
        outcome.error().map(ToString::to_string).as_deref(),
        Some("localhost not allowed")
    );
}
