//! Dual-stack name resolution and the local-address safety filter.
//!
//! This module provides:
//! - The `HostLookup` seam with a `hickory-resolver` implementation that runs
//!   independent IPv6 (AAAA) and IPv4 (A) lookups
//! - `StaticLookup`, which answers from fixed host tables
//! - `AddressResolver`, which turns a hostname into vetted IPv6/IPv4 candidates
//!
//! A loopback or zero-prefixed answer in either family ends resolution with
//! `FetchError::LocalhostNotAllowed`, even if the other family is usable.

mod lookup;
mod resolution;
mod static_lookup;

// Re-export public API
pub use lookup::{HickoryLookup, HostLookup, LookupError};
pub use resolution::{is_forbidden_ipv4, is_forbidden_ipv6, AddressResolver, Resolved};
pub use static_lookup::StaticLookup;
