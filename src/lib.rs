//! fetch_status library: background fetching of raw HTTP responses
//!
//! Each submitted `http://` url is fetched by its own tokio task: the host is
//! resolved for IPv6 and IPv4, loopback answers are refused, and the raw
//! response bytes are read until the peer closes the connection. A
//! [`RequestRegistry`] tracks pending requests and collects outcomes when
//! polled.
//!
//! # Example
//!
//! ```no_run
//! use fetch_status::initialization::init_fetch_context;
//! use fetch_status::{FetchConfig, RequestRegistry};
//! use tokio::runtime::Handle;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ctx = init_fetch_context(&FetchConfig::default())?;
//! let registry = RequestRegistry::new(ctx, Handle::current());
//!
//! let id = registry.submit("http://example.com/");
//! while registry.get(id).is_none() {
//!     registry.poll();
//!     tokio::time::sleep(std::time::Duration::from_millis(50)).await;
//! }
//! if let Some(outcome) = registry.get(id) {
//!     println!("{:?}", outcome.response().map(<[u8]>::len));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Workers are spawned on the runtime
//! handle given to [`RequestRegistry::new`].

pub mod app;
pub mod config;
mod dns;
mod error_handling;
mod fetch;
pub mod initialization;
mod models;
mod registry;
mod worker;

#[cfg(test)]
mod test_support;

// Re-export public API
pub use config::{AddressPolicy, FetchConfig, LogFormat, LogLevel, Opt};
pub use dns::{
    is_forbidden_ipv4, is_forbidden_ipv6, AddressResolver, HickoryLookup, HostLookup,
    LookupError, Resolved, StaticLookup,
};
pub use error_handling::{
    categorize_fetch_error, ErrorType, FetchError, InitializationError, ProcessingStats,
};
pub use fetch::{build_request, fetch, parse_url, AddressFamily, FetchContext, ParsedUrl, Target};
pub use models::{Outcome, RequestId};
pub use registry::RequestRegistry;
pub use worker::{run_worker, FetchWorker, WorkerState};
