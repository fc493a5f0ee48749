//! Request lifecycle tracking.
//!
//! [`RequestRegistry`] spawns one worker task per submitted url and keeps two
//! collections behind a single mutex:
//! - pending entries, in submission order, each owning its worker's `JoinHandle`
//! - completed outcomes, append-only, in the order `poll()` noticed them
//!
//! Workers never touch the registry. `poll()` is the only place a request
//! moves from pending to completed, so the completed order reflects when the
//! caller looked, not when the worker finished or which request came first.

use std::any::Any;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use futures::FutureExt;
use log::{debug, info};
use tokio::runtime::Handle;
use tokio::task::{self, JoinError, JoinHandle};

use crate::error_handling::{update_error_stats, FetchError, ProcessingStats};
use crate::fetch::FetchContext;
use crate::models::{Outcome, RequestId};
use crate::worker::run_worker;

/// A submitted request whose outcome has not been collected yet.
struct PendingEntry {
    id: RequestId,
    url: String,
    submitted_at: Instant,
    handle: JoinHandle<Outcome>,
}

struct RegistryState {
    next_id: RequestId,
    pending: Vec<PendingEntry>,
    completed: Vec<Arc<Outcome>>,
}

/// Owns in-flight workers and completed outcomes.
///
/// All methods take `&self` and are safe to call from several threads; they
/// serialize on one internal lock and never wait on network I/O.
pub struct RequestRegistry {
    state: Mutex<RegistryState>,
    ctx: Arc<FetchContext>,
    runtime: Handle,
    stats: Arc<ProcessingStats>,
}

impl RequestRegistry {
    /// Creates an empty registry that spawns workers on `runtime`.
    pub fn new(ctx: FetchContext, runtime: Handle) -> Self {
        Self {
            state: Mutex::new(RegistryState {
                next_id: RequestId::new(0),
                pending: Vec::new(),
                completed: Vec::new(),
            }),
            ctx: Arc::new(ctx),
            runtime,
            stats: Arc::new(ProcessingStats::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        // Nothing panics while holding the lock, but a poisoned registry is still consistent
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts fetching `url` in the background and returns its id.
    ///
    /// The url is passed to the worker as-is; malformed urls produce a failure
    /// outcome rather than an error here.
    pub fn submit(&self, url: impl Into<String>) -> RequestId {
        let url = url.into();
        let mut state = self.lock();
        let id = state.next_id;
        state.next_id = id.next();

        let ctx = Arc::clone(&self.ctx);
        let worker_url = url.clone();
        let handle = self
            .runtime
            .spawn(async move { run_worker(id, &worker_url, &ctx).await });

        debug!("Submitted request {id}: {url}");
        state.pending.push(PendingEntry {
            id,
            url,
            submitted_at: Instant::now(),
            handle,
        });
        id
    }

    /// Moves every finished worker's outcome to the completed list.
    ///
    /// Each pending entry is checked once, without waiting. Outcomes are
    /// appended in the order they are found during this pass. Returns how many
    /// requests completed.
    pub fn poll(&self) -> usize {
        let mut state = self.lock();
        let pending = std::mem::take(&mut state.pending);
        let mut migrated = 0;

        for mut entry in pending {
            let joined = if entry.handle.is_finished() {
                // Outside the coop budget, or a long pending list stops yielding results
                task::unconstrained(&mut entry.handle).now_or_never()
            } else {
                None
            };

            match joined {
                None => state.pending.push(entry),
                Some(joined) => {
                    let outcome = match joined {
                        Ok(outcome) => outcome,
                        Err(e) => Outcome {
                            id: entry.id,
                            result: Err(FetchError::WorkerPanicked(join_error_message(e))),
                            elapsed: entry.submitted_at.elapsed(),
                        },
                    };
                    update_error_stats(&self.stats, &outcome.result);
                    match &outcome.result {
                        Ok(bytes) => info!(
                            "Request {} completed: {} bytes in {:.2}s",
                            outcome.id,
                            bytes.len(),
                            outcome.elapsed.as_secs_f64()
                        ),
                        Err(e) => info!(
                            "Request {} failed after {:.2}s: {e}",
                            outcome.id,
                            outcome.elapsed.as_secs_f64()
                        ),
                    }
                    state.completed.push(Arc::new(outcome));
                    migrated += 1;
                }
            }
        }

        migrated
    }

    /// Snapshot of pending requests as `(id, url)`, in submission order.
    pub fn list_pending(&self) -> Vec<(RequestId, String)> {
        self.lock()
            .pending
            .iter()
            .map(|entry| (entry.id, entry.url.clone()))
            .collect()
    }

    /// Snapshot of completed outcomes, in the order they were collected.
    pub fn list_completed(&self) -> Vec<Arc<Outcome>> {
        self.lock().completed.clone()
    }

    /// Completed outcome for `id`, if it has been collected.
    pub fn get(&self, id: RequestId) -> Option<Arc<Outcome>> {
        self.lock()
            .completed
            .iter()
            .find(|outcome| outcome.id == id)
            .cloned()
    }

    pub fn pending_count(&self) -> usize {
        self.lock().pending.len()
    }

    pub fn completed_count(&self) -> usize {
        self.lock().completed.len()
    }

    /// Success and failure counters over all collected outcomes.
    pub fn stats(&self) -> &ProcessingStats {
        &self.stats
    }
}

fn join_error_message(error: JoinError) -> String {
    if !error.is_panic() {
        return error.to_string();
    }
    let payload: Box<dyn Any + Send> = error.into_panic();
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
