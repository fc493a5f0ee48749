//! Configuration constants.
//!
//! This module defines the timeouts, size limits, and URL constraints used
//! by the fetch engine and the console.

use std::time::Duration;

// Network operation timeouts
/// Send/receive timeout applied to every socket operation of a fetch.
/// Connect is bounded by the same value.
pub const IO_TIMEOUT: Duration = Duration::from_secs(10);
/// DNS query timeout in seconds
pub const DNS_TIMEOUT_SECS: u64 = 10;
/// DNS query attempts per lookup
pub const DNS_ATTEMPTS: usize = 2;

// Response buffer sizing
/// Capacity of a fresh response buffer in bytes
pub const INITIAL_RESPONSE_BUFFER: usize = 2048;
/// Growth step of the response buffer. The buffer always keeps at least this
/// much free space ahead of the fill level.
pub const RESPONSE_BUFFER_STEP: usize = 1024;
/// Hard ceiling on response buffer capacity (3 MiB)
pub const MAX_RESPONSE_SIZE: usize = 3 * (1 << 20);

// URL constraints
/// Only plain HTTP is fetched
pub const HTTP_SCHEME_PREFIX: &str = "http://";
/// Longest accepted host segment (host plus optional `:port`)
pub const MAX_HOST_LEN: usize = 256;
/// Port used when the URL carries none
pub const DEFAULT_HTTP_PORT: u16 = 80;
/// Shortest url text the console accepts
pub const MIN_URL_LEN: usize = 8;

// Status rendering
/// A status line is only reported when its `\r` appears within this many bytes
pub const STATUS_LINE_SCAN_LIMIT: usize = 100;
