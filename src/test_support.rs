//! Shared doubles for unit tests.

use std::sync::Arc;

use crate::config::{AddressPolicy, FetchConfig};
use crate::fetch::FetchContext;

pub use crate::dns::StaticLookup;

/// Context over `lookup` with a short timeout.
pub fn context_with(lookup: Arc<StaticLookup>, policy: AddressPolicy) -> FetchContext {
    let config = FetchConfig {
        io_timeout: std::time::Duration::from_secs(5),
        address_policy: policy,
        ..Default::default()
    };
    FetchContext::new(lookup, config)
}

/// Reads one request head from `stream`.
pub async fn read_request(stream: &mut tokio::net::TcpStream) -> Vec<u8> {
    use tokio::io::AsyncReadExt;

    let mut request = Vec::new();
    let mut chunk = [0u8; 512];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => request.extend_from_slice(&chunk[..n]),
        }
    }
    request
}

/// Serves `response` on 127.0.0.1 to one client after `delay`, then closes.
pub async fn serve_after(delay: std::time::Duration, response: Vec<u8>) -> std::net::SocketAddr {
    use tokio::io::AsyncWriteExt;

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept");
        let _ = read_request(&mut stream).await;
        tokio::time::sleep(delay).await;
        let _ = stream.write_all(&response).await;
        let _ = stream.shutdown().await;
    });
    addr
}

/// Serves `response` on 127.0.0.1 to one client immediately.
pub async fn serve_once(response: &[u8]) -> std::net::SocketAddr {
    serve_after(std::time::Duration::ZERO, response.to_vec()).await
}
