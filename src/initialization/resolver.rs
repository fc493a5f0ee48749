//! DNS resolver initialization.
//!
//! This module builds the per-family hickory lookups with timeouts short enough
//! that an unresponsive name server cannot stall a worker for long.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::system_conf::read_system_conf;
use log::{debug, warn};

use crate::config::{DNS_ATTEMPTS, DNS_TIMEOUT_SECS};
use crate::dns::HickoryLookup;

/// Initializes the DNS lookup used by workers.
///
/// Prefers the system resolver configuration (`/etc/resolv.conf` and
/// friends) and falls back to hickory's default upstreams when it cannot be
/// read. Either way the timeout is `DNS_TIMEOUT_SECS` with `DNS_ATTEMPTS` tries.
pub fn init_resolver() -> Arc<HickoryLookup> {
    let (config, mut opts) = match read_system_conf() {
        Ok((config, opts)) => {
            debug!(
                "Using system DNS configuration with {} name servers",
                config.name_servers().len()
            );
            (config, opts)
        }
        Err(e) => {
            warn!("Failed to read system DNS configuration, using defaults: {e}");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    opts.timeout = Duration::from_secs(DNS_TIMEOUT_SECS);
    opts.attempts = DNS_ATTEMPTS;

    Arc::new(HickoryLookup::new(config, opts))
}
