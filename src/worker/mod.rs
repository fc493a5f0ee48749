//! One end-to-end url fetch, run as its own tokio task.
//!
//! A worker parses the url, resolves the host, then tries the IPv6 candidate
//! and falls back to IPv4 if that attempt fails. Resolution of both families
//! together is bounded by the I/O timeout. Only a *connection* failure on
//! IPv6 falls back; a forbidden resolved address ends the request immediately.
//! An oversized IPv6 response is also final, since refetching it over IPv4
//! would only exhaust the same limit again.

use std::net::IpAddr;
use std::time::Instant;

use log::{debug, trace};

use crate::error_handling::FetchError;
use crate::fetch::{fetch, parse_url, AddressFamily, FetchContext, ParsedUrl};
use crate::models::{Outcome, RequestId};

/// Lifecycle stage of a worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    Created,
    Resolving,
    Fetching(AddressFamily),
    Done { success: bool },
}

/// A single fetch from url text to [`Outcome`].
pub struct FetchWorker<'a> {
    id: RequestId,
    url: &'a str,
    ctx: &'a FetchContext,
    state: WorkerState,
}

impl<'a> FetchWorker<'a> {
    pub fn new(id: RequestId, url: &'a str, ctx: &'a FetchContext) -> Self {
        Self {
            id,
            url,
            ctx,
            state: WorkerState::Created,
        }
    }

    pub fn state(&self) -> WorkerState {
        self.state
    }

    /// Runs the fetch to completion. Never fails: every error ends up in the outcome.
    pub async fn run(&mut self) -> Outcome {
        let started = Instant::now();
        let result = self.execute().await;
        self.enter(WorkerState::Done {
            success: result.is_ok(),
        });

        match &result {
            Ok(bytes) => debug!("[{}] {} -> {} bytes", self.id, self.url, bytes.len()),
            Err(e) => debug!("[{}] {} failed: {e}", self.id, self.url),
        }

        Outcome {
            id: self.id,
            result,
            elapsed: started.elapsed(),
        }
    }

    async fn execute(&mut self) -> Result<Vec<u8>, FetchError> {
        let parsed = parse_url(self.url)?;

        self.enter(WorkerState::Resolving);
        let limit = self.ctx.config().io_timeout;
        let resolved = tokio::time::timeout(limit, self.ctx.resolver().resolve(&parsed.host))
            .await
            .map_err(|_| {
                FetchError::Resolution(format!(
                    "resolving {} timed out after {}s",
                    parsed.host,
                    limit.as_secs_f64()
                ))
            })??;

        if let Some(ipv6) = resolved.ipv6 {
            match self.attempt(&parsed, IpAddr::V6(ipv6)).await {
                Err(FetchError::Io(e)) => {
                    debug!(
                        "[{}] IPv6 attempt to [{ipv6}]:{} failed, falling back to IPv4: {e}",
                        self.id, parsed.port
                    );
                }
                finished => return finished,
            }
        }

        match resolved.ipv4 {
            Ok(ipv4) => self.attempt(&parsed, IpAddr::V4(ipv4)).await,
            Err(e) => Err(FetchError::Resolution(e.to_string())),
        }
    }

    async fn attempt(&mut self, parsed: &ParsedUrl, ip: IpAddr) -> Result<Vec<u8>, FetchError> {
        let target = parsed.target(ip);
        self.enter(WorkerState::Fetching(target.family()));
        fetch(&target, self.ctx.config()).await
    }

    fn enter(&mut self, next: WorkerState) {
        trace!("[{}] {:?} -> {:?}", self.id, self.state, next);
        self.state = next;
    }
}

/// Runs a worker for `url` and returns its outcome.
pub async fn run_worker(id: RequestId, url: &str, ctx: &FetchContext) -> Outcome {
    FetchWorker::new(id, url, ctx).run().await
}
