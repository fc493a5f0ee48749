//! Shared resources for fetch workers.

use std::sync::Arc;

use crate::config::FetchConfig;
use crate::dns::{AddressResolver, HostLookup};

/// Everything a worker needs besides its url.
///
/// Shared read-only between workers behind an `Arc`. The resolver's safety
/// policy is always `config.address_policy`.
#[derive(Clone)]
pub struct FetchContext {
    resolver: AddressResolver,
    config: FetchConfig,
}

impl FetchContext {
    /// Builds the resolver over `lookup` with the policy from `config`.
    pub fn new(lookup: Arc<dyn HostLookup>, config: FetchConfig) -> Self {
        Self {
            resolver: AddressResolver::new(lookup, config.address_policy),
            config,
        }
    }

    /// Dual-stack resolver with the configured safety policy
    pub fn resolver(&self) -> &AddressResolver {
        &self.resolver
    }

    /// Timeouts, buffer limits, and the address policy
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}
