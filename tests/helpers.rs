// Shared test helpers: registries over pinned hosts and raw TCP peers.
//
// The peers are plain `TcpListener`s rather than an HTTP framework because the
// tests depend on byte-exact responses, stalls, and early hang-ups.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::runtime::Handle;

use fetch_status::{AddressPolicy, FetchConfig, FetchContext, RequestRegistry, StaticLookup};

/// Registry over `lookup` with a 5s socket timeout.
#[allow(dead_code)]
pub fn registry(lookup: StaticLookup, policy: AddressPolicy) -> RequestRegistry {
    registry_with_config(
        lookup,
        FetchConfig {
            io_timeout: Duration::from_secs(5),
            address_policy: policy,
            ..Default::default()
        },
    )
}

/// Registry over `lookup` with an explicit configuration.
pub fn registry_with_config(lookup: StaticLookup, config: FetchConfig) -> RequestRegistry {
    RequestRegistry::new(FetchContext::new(Arc::new(lookup), config), Handle::current())
}

/// Polls until `count` outcomes are collected, failing after 15s.
#[allow(dead_code)]
pub async fn poll_until_completed(registry: &RequestRegistry, count: usize) {
    let deadline = Instant::now() + Duration::from_secs(15);
    while registry.completed_count() < count {
        assert!(
            Instant::now() < deadline,
            "timed out with {} of {count} requests completed",
            registry.completed_count()
        );
        registry.poll();
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

/// A one-shot raw peer on 127.0.0.1.
pub struct RawServer {
    pub addr: SocketAddr,
    accepted: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl RawServer {
    /// Accepts one client, reads its request head, waits `delay`, writes
    /// `response`, and closes.
    pub async fn start(delay: Duration, response: Vec<u8>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test server");
        let addr = listener.local_addr().expect("Failed to read local addr");
        let accepted = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&accepted);

        tokio::spawn(async move {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };
            counter.fetch_add(1, Ordering::SeqCst);

            let mut head = Vec::new();
            let mut chunk = [0u8; 512];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut chunk).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => head.extend_from_slice(&chunk[..n]),
                }
            }

            tokio::time::sleep(delay).await;
            // The client may hang up first when it rejects an oversized response
            let _ = stream.write_all(&response).await;
            let _ = stream.shutdown().await;
        });

        Self { addr, accepted }
    }

    pub async fn instant(response: &[u8]) -> Self {
        Self::start(Duration::ZERO, response.to_vec()).await
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Number of connections the server has accepted.
    pub fn accepted(&self) -> usize {
        self.accepted.load(Ordering::SeqCst)
    }
}
