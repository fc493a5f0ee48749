//! Hostname resolution with the local-address safety filter.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

use log::{debug, warn};

use super::lookup::{HostLookup, LookupError};
use crate::config::AddressPolicy;
use crate::error_handling::FetchError;

/// Candidates produced by a successful resolution.
///
/// At least one family is usable. `ipv4` keeps the lookup error when there is
/// no IPv4 address, since that text becomes the request's failure message if
/// the IPv6 attempt fails as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub ipv6: Option<Ipv6Addr>,
    pub ipv4: Result<Ipv4Addr, LookupError>,
}

/// True for `::1` and for any address whose first byte is zero.
pub fn is_forbidden_ipv6(addr: Ipv6Addr) -> bool {
    addr == Ipv6Addr::LOCALHOST || addr.octets()[0] == 0
}

/// True for 127.0.0.0/8 and 0.0.0.0/8.
pub fn is_forbidden_ipv4(addr: Ipv4Addr) -> bool {
    let first = addr.octets()[0];
    first == 127 || first == 0
}

/// Resolves hostnames to vetted IPv6/IPv4 candidates.
#[derive(Clone)]
pub struct AddressResolver {
    lookup: Arc<dyn HostLookup>,
    policy: AddressPolicy,
}

impl AddressResolver {
    pub fn new(lookup: Arc<dyn HostLookup>, policy: AddressPolicy) -> Self {
        Self { lookup, policy }
    }

    pub fn policy(&self) -> AddressPolicy {
        self.policy
    }

    /// Looks up `host` in both families and applies the safety filter.
    ///
    /// The IPv6 answer is checked before the IPv4 lookup runs. A forbidden
    /// address in either family fails the whole resolution.
    ///
    /// # Errors
    ///
    /// - `FetchError::LocalhostNotAllowed` if any answer is forbidden
    /// - `FetchError::Resolution` with the IPv4 lookup text if neither family resolves
    pub async fn resolve(&self, host: &str) -> Result<Resolved, FetchError> {
        let ipv6 = match self.lookup.lookup_ipv6(host).await {
            Ok(addr) => {
                if self.rejects(is_forbidden_ipv6(addr)) {
                    warn!("Rejected {host}: resolves to local address {addr}");
                    return Err(FetchError::LocalhostNotAllowed);
                }
                Some(addr)
            }
            Err(e) => {
                debug!("No IPv6 address for {host}: {e}");
                None
            }
        };

        let ipv4 = self.lookup.lookup_ipv4(host).await;
        match &ipv4 {
            Ok(addr) if self.rejects(is_forbidden_ipv4(*addr)) => {
                warn!("Rejected {host}: resolves to local address {addr}");
                return Err(FetchError::LocalhostNotAllowed);
            }
            Err(e) if ipv6.is_none() => {
                debug!("No address at all for {host}: {e}");
                return Err(FetchError::Resolution(e.to_string()));
            }
            _ => {}
        }

        Ok(Resolved { ipv6, ipv4 })
    }

    fn rejects(&self, forbidden: bool) -> bool {
        forbidden && self.policy == AddressPolicy::PublicOnly
    }
}
