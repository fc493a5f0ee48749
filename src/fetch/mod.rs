//! Raw HTTP/1.1 exchange over a fresh TCP connection.
//!
//! One call to [`fetch`] opens a connection, writes a fixed `GET` request and
//! reads until the peer closes. The response is returned verbatim; nothing is
//! parsed, so framing (`Content-Length`, chunked encoding) is irrelevant and
//! end-of-stream is the only completion signal.

mod buffer;
mod context;
mod request;
mod target;

use std::future::Future;
use std::io;
use std::time::Duration;

use log::{debug, trace};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::config::FetchConfig;
use crate::error_handling::FetchError;

// Re-export public API
pub use buffer::ResponseBuffer;
pub use context::FetchContext;
pub use request::build_request;
pub use target::{parse_url, AddressFamily, ParsedUrl, Target};

/// Runs one socket operation under `limit`, mapping expiry to `ErrorKind::TimedOut`.
async fn with_timeout<T>(
    limit: Duration,
    operation: &str,
    fut: impl Future<Output = io::Result<T>>,
) -> io::Result<T> {
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(io::Error::new(
            io::ErrorKind::TimedOut,
            format!("{operation} timed out after {}s", limit.as_secs_f64()),
        )),
    }
}

/// Fetches `target` and returns the raw response bytes.
///
/// Connect, the request write, and every read are each bounded by
/// `config.io_timeout`.
///
/// # Errors
///
/// - `FetchError::Io` if connecting, sending, or receiving fails or times out
/// - `FetchError::ResponseTooLarge` if the response outgrows `config.max_response_bytes`
pub async fn fetch(target: &Target, config: &FetchConfig) -> Result<Vec<u8>, FetchError> {
    debug!(
        "Connecting to {} ({}) for {}{}",
        target.addr,
        target.family(),
        target.host,
        target.path
    );
    let mut stream = with_timeout(
        config.io_timeout,
        "connect",
        TcpStream::connect(target.addr),
    )
    .await?;

    let request = build_request(&target.host, &target.path);
    with_timeout(config.io_timeout, "send", stream.write_all(&request)).await?;

    let mut buffer = ResponseBuffer::new(
        config.initial_buffer,
        config.buffer_step,
        config.max_response_bytes,
    );
    loop {
        let n = with_timeout(
            config.io_timeout,
            "receive",
            stream.read(buffer.spare_mut()),
        )
        .await?;
        buffer.advance(n)?;
        trace!("Read {n} bytes from {} ({} total)", target.addr, buffer.len());
        if n == 0 {
            break;
        }
    }

    debug!("Received {} bytes from {}", buffer.len(), target.addr);
    Ok(buffer.into_bytes())
}
