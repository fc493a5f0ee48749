//! Text rendering for the console listings.
//!
//! Every function here is pure so the exact output can be tested without a
//! terminal.

use std::borrow::Cow;

use crate::config::STATUS_LINE_SCAN_LIMIT;
use crate::models::{Outcome, RequestId};

/// Text before the first `\r` of `response`, if one occurs within the scan limit.
pub fn status_line(response: &[u8]) -> Option<Cow<'_, str>> {
    let window = &response[..response.len().min(STATUS_LINE_SCAN_LIMIT)];
    window
        .iter()
        .position(|&b| b == b'\r')
        .map(|end| String::from_utf8_lossy(&response[..end]))
}

/// `Pending:` followed by one `\t[<id>] <url>` line per entry.
pub fn render_pending(pending: &[(RequestId, String)]) -> String {
    let mut out = String::from("Pending:\n");
    for (id, url) in pending {
        out.push_str(&format!("\t[{id}] {url}\n"));
    }
    out
}

/// One `Done:` listing line for `outcome`, without the trailing newline.
pub fn completed_line(outcome: &Outcome) -> String {
    match &outcome.result {
        Ok(response) => match status_line(response) {
            Some(status) => format!("\t[{}] OK, {status}", outcome.id),
            None => format!("\t[{}] OK, status unknown", outcome.id),
        },
        Err(e) => format!("\t[{}] FAIL: {e}", outcome.id),
    }
}

/// `Done:` followed by one line per outcome, in the given order.
pub fn render_completed<'a, I>(completed: I) -> String
where
    I: IntoIterator<Item = &'a Outcome>,
{
    let mut out = String::from("Done:\n");
    for outcome in completed {
        out.push_str(&completed_line(outcome));
        out.push('\n');
    }
    out
}

/// Full view of one request: the raw response bytes, or its failure message.
///
/// Responses are emitted verbatim and may not be valid UTF-8.
pub fn render_view(id: RequestId, outcome: Option<&Outcome>) -> Vec<u8> {
    match outcome.map(|o| &o.result) {
        Some(Ok(response)) => {
            let mut out = format!("[{id}] Response, {} bytes:\n", response.len()).into_bytes();
            out.extend_from_slice(response);
            out.extend_from_slice(b"\n\n");
            out
        }
        Some(Err(e)) => format!("[{id}] failed, error: {e}\n").into_bytes(),
        None => format!("Request {id} not found.\n").into_bytes(),
    }
}
