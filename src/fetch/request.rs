//! HTTP/1.1 request serialization.

/// Headers sent after `Host`, including the blank line that ends the request.
const TRAILING_HEADERS: &str = "Accept-Encoding: text/plain\r\nConnection: close\r\n\r\n";

/// Builds the exact bytes of a `GET` request for `path` on `host`.
pub fn build_request(host: &str, path: &str) -> Vec<u8> {
    format!("GET {path} HTTP/1.1\r\nHost: {host}\r\n{TRAILING_HEADERS}").into_bytes()
}
