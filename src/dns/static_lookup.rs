//! Table-driven lookups.

use std::collections::HashMap;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::dns::{HostLookup, LookupError};

/// Answers lookups from fixed per-family tables and counts the queries.
///
/// A host missing from a table fails that family with a resolver-style
/// message, so pinned hosts behave like real names without touching DNS.
#[derive(Default)]
pub struct StaticLookup {
    ipv6: HashMap<String, Ipv6Addr>,
    ipv4: HashMap<String, Ipv4Addr>,
    queries: AtomicUsize,
}

impl StaticLookup {
    /// Empty tables: every lookup fails.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ipv6(mut self, host: &str, addr: Ipv6Addr) -> Self {
        self.ipv6.insert(host.to_string(), addr);
        self
    }

    pub fn with_ipv4(mut self, host: &str, addr: Ipv4Addr) -> Self {
        self.ipv4.insert(host.to_string(), addr);
        self
    }

    /// Lookups answered so far, in either family.
    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl HostLookup for StaticLookup {
    fn lookup_ipv6<'a>(&'a self, host: &'a str) -> BoxFuture<'a, Result<Ipv6Addr, LookupError>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        let answer = self
            .ipv6
            .get(host)
            .copied()
            .ok_or_else(|| LookupError(format!("no AAAA record for {host}")));
        async move { answer }.boxed()
    }

    fn lookup_ipv4<'a>(&'a self, host: &'a str) -> BoxFuture<'a, Result<Ipv4Addr, LookupError>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        let answer = self
            .ipv4
            .get(host)
            .copied()
            .ok_or_else(|| LookupError(format!("no A record for {host}")));
        async move { answer }.boxed()
    }
}
