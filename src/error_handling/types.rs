//! Error type definitions.
//!
//! This module defines the per-request failure type, initialization errors, and
//! the categories used for processing statistics.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// The fetch configuration failed validation.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

/// Why a single fetch failed.
///
/// The `Display` text of each variant is what the user sees as the failure
/// message of the request.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The url does not start with `http://`.
    #[error("not http")]
    NotHttp,

    /// The host segment (including any `:port`) is longer than allowed.
    #[error("host too long")]
    HostTooLong,

    /// The `:port` suffix is not a decimal number below 65536.
    #[error("invalid port")]
    InvalidPort(String),

    /// A resolved address is loopback or zero-prefixed.
    #[error("localhost not allowed")]
    LocalhostNotAllowed,

    /// Name resolution produced no usable address. Carries the resolver's text.
    #[error("{0}")]
    Resolution(String),

    /// Connect, send, or receive failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The response outgrew the buffer ceiling.
    #[error("response exceeded {limit} bytes")]
    ResponseTooLarge {
        /// Buffer ceiling in bytes
        limit: usize,
    },

    /// The worker task panicked or was aborted before producing a result.
    #[error("worker panicked: {0}")]
    WorkerPanicked(String),
}

/// Categories of failed requests, used for statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // Malformed input
    NotHttpError,
    HostTooLongError,
    InvalidPortError,
    // Policy
    LocalhostRejected,
    // Resolution
    DnsResolutionError,
    // Network
    ConnectionError,
    IoTimeoutError,
    // Resources
    ResponseTooLargeError,
    WorkerPanicError,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::NotHttpError => "Not an http:// url",
            ErrorType::HostTooLongError => "Host too long",
            ErrorType::InvalidPortError => "Invalid port",
            ErrorType::LocalhostRejected => "Local address rejected",
            ErrorType::DnsResolutionError => "DNS resolution error",
            ErrorType::ConnectionError => "Connection error",
            ErrorType::IoTimeoutError => "I/O timeout",
            ErrorType::ResponseTooLargeError => "Response too large",
            ErrorType::WorkerPanicError => "Worker panic",
        }
    }
}
