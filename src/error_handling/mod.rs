//! Error handling and processing statistics.
//!
//! This module provides:
//! - The per-request failure type (`FetchError`) and initialization errors
//! - Failure categorization
//! - Processing statistics tracking

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_fetch_error, update_error_stats};
pub use stats::ProcessingStats;
pub use types::{ErrorType, FetchError, InitializationError};
