//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, buffer limits, URL constraints)
//! - Library configuration (`FetchConfig`)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{AddressPolicy, FetchConfig, LogFormat, LogLevel, Opt};
