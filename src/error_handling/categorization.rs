//! Error categorization.

use std::io::ErrorKind;

use super::stats::ProcessingStats;
use super::types::{ErrorType, FetchError};

/// Maps a request failure to its statistics category.
pub fn categorize_fetch_error(error: &FetchError) -> ErrorType {
    match error {
        FetchError::NotHttp => ErrorType::NotHttpError,
        FetchError::HostTooLong => ErrorType::HostTooLongError,
        FetchError::InvalidPort(_) => ErrorType::InvalidPortError,
        FetchError::LocalhostNotAllowed => ErrorType::LocalhostRejected,
        FetchError::Resolution(_) => ErrorType::DnsResolutionError,
        FetchError::Io(e) if e.kind() == ErrorKind::TimedOut => ErrorType::IoTimeoutError,
        FetchError::Io(_) => ErrorType::ConnectionError,
        FetchError::ResponseTooLarge { .. } => ErrorType::ResponseTooLargeError,
        FetchError::WorkerPanicked(_) => ErrorType::WorkerPanicError,
    }
}

/// Records the result of one request in `stats`.
pub fn update_error_stats<T>(stats: &ProcessingStats, result: &Result<T, FetchError>) {
    match result {
        Ok(_) => stats.increment_success(),
        Err(e) => stats.increment_error(categorize_fetch_error(e)),
    }
}
