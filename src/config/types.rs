//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and for configuring the fetch engine.

use std::time::Duration;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};

use crate::config::constants::{
    INITIAL_RESPONSE_BUFFER, IO_TIMEOUT, MAX_RESPONSE_SIZE, RESPONSE_BUFFER_STEP,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Which resolved addresses a fetch may connect to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AddressPolicy {
    /// Reject loopback and zero-prefixed addresses (the default).
    #[default]
    PublicOnly,
    /// Accept every resolved address. Intended for local test servers.
    Unrestricted,
}

/// Library configuration for the fetch engine (no CLI dependencies).
///
/// # Examples
///
/// ```
/// use fetch_status::FetchConfig;
/// use std::time::Duration;
///
/// let config = FetchConfig {
///     io_timeout: Duration::from_secs(5),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Timeout for connect and for each individual send/receive
    pub io_timeout: Duration,

    /// Initial response buffer capacity in bytes
    pub initial_buffer: usize,

    /// Response buffer growth step in bytes
    pub buffer_step: usize,

    /// Response buffer ceiling in bytes; growing past it fails the request
    pub max_response_bytes: usize,

    /// Safety filter applied to resolved addresses
    pub address_policy: AddressPolicy,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            io_timeout: IO_TIMEOUT,
            initial_buffer: INITIAL_RESPONSE_BUFFER,
            buffer_step: RESPONSE_BUFFER_STEP,
            max_response_bytes: MAX_RESPONSE_SIZE,
            address_policy: AddressPolicy::PublicOnly,
        }
    }
}

impl FetchConfig {
    /// Checks that the buffer and timeout settings are usable.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        if self.io_timeout.is_zero() {
            bail!("io_timeout must be greater than zero");
        }
        if self.initial_buffer == 0 {
            bail!("initial_buffer must be greater than zero");
        }
        if self.buffer_step == 0 {
            bail!("buffer_step must be greater than zero");
        }
        if self.max_response_bytes < self.initial_buffer {
            bail!(
                "max_response_bytes ({}) must be at least initial_buffer ({})",
                self.max_response_bytes,
                self.initial_buffer
            );
        }
        Ok(())
    }
}

/// Command-line options for the interactive binary.
///
/// # Examples
///
/// ```bash
/// # Defaults: 10s socket timeout, 3 MiB response ceiling
/// fetch_status
///
/// # Verbose JSON logs on stderr
/// fetch_status --log-level debug --log-format json
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "fetch_status",
    about = "Fetches http:// urls in the background and keeps the raw responses."
)]
pub struct Opt {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Connect/send/receive timeout in seconds
    #[arg(long, default_value_t = IO_TIMEOUT.as_secs())]
    pub timeout_seconds: u64,

    /// Largest response kept in memory, in bytes
    #[arg(long, default_value_t = MAX_RESPONSE_SIZE)]
    pub max_response_bytes: usize,
}

impl From<&Opt> for FetchConfig {
    fn from(opt: &Opt) -> Self {
        Self {
            io_timeout: Duration::from_secs(opt.timeout_seconds),
            max_response_bytes: opt.max_response_bytes,
            ..Default::default()
        }
    }
}
