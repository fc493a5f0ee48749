//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources:
//! - Logger
//! - DNS lookup
//! - Fetch context (validated configuration plus resolver)
//!
//! All initialization functions return proper error types for error handling.

mod logger;
mod resolver;

use std::sync::Arc;

use crate::config::FetchConfig;
use crate::dns::HostLookup;
use crate::error_handling::InitializationError;
use crate::fetch::FetchContext;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::init_resolver;

/// Validates `config` and pairs it with a system-configured resolver.
///
/// # Errors
///
/// Returns `InitializationError::ConfigError` if the configuration is unusable.
pub fn init_fetch_context(config: &FetchConfig) -> Result<FetchContext, InitializationError> {
    init_fetch_context_with(config, init_resolver())
}

/// Same as [`init_fetch_context`] but with a caller-supplied lookup.
///
/// # Errors
///
/// Returns `InitializationError::ConfigError` if the configuration is unusable.
pub fn init_fetch_context_with(
    config: &FetchConfig,
    lookup: Arc<dyn HostLookup>,
) -> Result<FetchContext, InitializationError> {
    config
        .validate()
        .map_err(|e| InitializationError::ConfigError(format!("{e:#}")))?;
    Ok(FetchContext::new(lookup, config.clone()))
}
