//! Per-family host lookups.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use futures::future::BoxFuture;
use futures::FutureExt;
use hickory_resolver::config::{LookupIpStrategy, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use thiserror::Error;

/// A failed lookup for one address family, carrying the resolver's own text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct LookupError(pub String);

/// Looks up one address per family for a hostname.
///
/// The two lookups are independent: a missing record in one family is
/// reported as an error for that family only.
pub trait HostLookup: Send + Sync {
    /// Returns the first IPv6 address of `host`.
    fn lookup_ipv6<'a>(&'a self, host: &'a str) -> BoxFuture<'a, Result<Ipv6Addr, LookupError>>;

    /// Returns the first IPv4 address of `host`.
    fn lookup_ipv4<'a>(&'a self, host: &'a str) -> BoxFuture<'a, Result<Ipv4Addr, LookupError>>;
}

/// `HostLookup` backed by two hickory resolvers, one per address family.
///
/// IP literals are answered without a query; a literal of the other family
/// counts as "no address" for this family.
pub struct HickoryLookup {
    ipv6: TokioAsyncResolver,
    ipv4: TokioAsyncResolver,
}

impl HickoryLookup {
    /// Builds the two resolvers from one configuration.
    pub fn new(config: ResolverConfig, opts: ResolverOpts) -> Self {
        let mut ipv6_opts = opts.clone();
        ipv6_opts.ip_strategy = LookupIpStrategy::Ipv6Only;
        let mut ipv4_opts = opts;
        ipv4_opts.ip_strategy = LookupIpStrategy::Ipv4Only;

        Self {
            ipv6: TokioAsyncResolver::tokio(config.clone(), ipv6_opts),
            ipv4: TokioAsyncResolver::tokio(config, ipv4_opts),
        }
    }
}

/// Runs `lookup_ip` on `resolver` and keeps the first address `pick` accepts.
async fn first_address<T>(
    resolver: &TokioAsyncResolver,
    host: &str,
    family: &str,
    pick: fn(IpAddr) -> Option<T>,
) -> Result<T, LookupError> {
    if let Ok(literal) = host.parse::<IpAddr>() {
        return pick(literal)
            .ok_or_else(|| LookupError(format!("no {family} address for literal {host}")));
    }

    let response = resolver
        .lookup_ip(host)
        .await
        .map_err(|e| LookupError(e.to_string()))?;
    response
        .iter()
        .find_map(pick)
        .ok_or_else(|| LookupError(format!("no {family} address found for {host}")))
}

impl HostLookup for HickoryLookup {
    fn lookup_ipv6<'a>(&'a self, host: &'a str) -> BoxFuture<'a, Result<Ipv6Addr, LookupError>> {
        first_address(&self.ipv6, host, "IPv6", |ip| match ip {
            IpAddr::V6(v6) => Some(v6),
            IpAddr::V4(_) => None,
        })
        .boxed()
    }

    fn lookup_ipv4<'a>(&'a self, host: &'a str) -> BoxFuture<'a, Result<Ipv4Addr, LookupError>> {
        first_address(&self.ipv4, host, "IPv4", |ip| match ip {
            IpAddr::V4(v4) => Some(v4),
            IpAddr::V6(_) => None,
        })
        .boxed()
    }
}
