//! Url parsing and connection targets.

use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::config::{DEFAULT_HTTP_PORT, HTTP_SCHEME_PREFIX, MAX_HOST_LEN};
use crate::error_handling::FetchError;

/// Address family of a connection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFamily {
    Ipv6,
    Ipv4,
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::Ipv6 => f.write_str("IPv6"),
            AddressFamily::Ipv4 => f.write_str("IPv4"),
        }
    }
}

/// Host, port, and path of an `http://` url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    pub host: String,
    pub port: u16,
    pub path: String,
}

impl ParsedUrl {
    /// Binds this url to one resolved address.
    pub fn target(&self, ip: IpAddr) -> Target {
        Target {
            addr: SocketAddr::new(ip, self.port),
            host: self.host.clone(),
            path: self.path.clone(),
        }
    }
}

/// One concrete destination for a single fetch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Resolved address and port
    pub addr: SocketAddr,
    /// Host name sent in the `Host` header
    pub host: String,
    /// Request path, always starting with `/`
    pub path: String,
}

impl Target {
    pub fn family(&self) -> AddressFamily {
        match self.addr {
            SocketAddr::V6(_) => AddressFamily::Ipv6,
            SocketAddr::V4(_) => AddressFamily::Ipv4,
        }
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

/// Splits an `http://host[:port][/path]` url.
///
/// The host segment runs up to the first `/` (or the end) and, including any
/// `:port`, may be at most `MAX_HOST_LEN` bytes. The path keeps everything
/// from that `/` on, query and fragment included, and defaults to `/`.
///
/// # Errors
///
/// - `FetchError::NotHttp` if the url does not start with `http://`
/// - `FetchError::HostTooLong` if the host segment is too long
/// - `FetchError::InvalidPort` if the port is not a decimal number below 65536
pub fn parse_url(url: &str) -> Result<ParsedUrl, FetchError> {
    let rest = url
        .strip_prefix(HTTP_SCHEME_PREFIX)
        .ok_or(FetchError::NotHttp)?;

    let host_end = rest.find('/').unwrap_or(rest.len());
    let authority = &rest[..host_end];
    if authority.len() > MAX_HOST_LEN {
        return Err(FetchError::HostTooLong);
    }

    let (host, port) = match authority.split_once(':') {
        Some((host, port)) => (host, parse_port(port)?),
        None => (authority, DEFAULT_HTTP_PORT),
    };

    let path = match &rest[host_end..] {
        "" => "/",
        path => path,
    };

    Ok(ParsedUrl {
        host: host.to_string(),
        port,
        path: path.to_string(),
    })
}

fn parse_port(text: &str) -> Result<u16, FetchError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FetchError::InvalidPort(text.to_string()));
    }
    text.parse::<u16>()
        .map_err(|_| FetchError::InvalidPort(text.to_string()))
}
