//! Request identifiers and outcomes.

use std::fmt;
use std::time::Duration;

use crate::error_handling::FetchError;

/// Identifier of one submitted request. Assigned densely from 0 by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    /// The id assigned after this one.
    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RequestId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Final result of one request. Produced exactly once per `RequestId`.
#[derive(Debug)]
pub struct Outcome {
    pub id: RequestId,
    /// Raw response bytes, or why the fetch failed
    pub result: Result<Vec<u8>, FetchError>,
    /// Time from worker start to its result
    pub elapsed: Duration,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Raw response bytes of a successful fetch.
    pub fn response(&self) -> Option<&[u8]> {
        self.result.as_deref().ok()
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.result.as_ref().err()
    }
}
