//! Menu loop reading single-letter commands.
//!
//! Menu, prompts, and listings go to `out`; logs go to stderr. The registry is
//! polled before every command is read, so finished requests show up in the
//! `f` listing and become viewable.

use std::io::Write;

use anyhow::{Context, Result};
use log::debug;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::app::render::{render_completed, render_pending, render_view};
use crate::config::MIN_URL_LEN;
use crate::models::RequestId;
use crate::registry::RequestRegistry;

const MENU: &str = "What do?\n\
    \tlist [p]ending requests\n\
    \tlist [f]inished requests\n\
    \t[v]iew result of request\n\
    \t[a]dd new request\n\
    \t[q]uit\n\
    Choice? [pfvaq] ";

/// Runs the menu until `q` or end of input.
///
/// A command letter may be followed by its argument on the same line
/// (`v 3`, `a http://example.com/`); otherwise the argument is read from the
/// next line after the prompt.
///
/// # Errors
///
/// Returns an error only if reading `input` or writing `out` fails.
pub async fn run_console<R, W>(registry: &RequestRegistry, mut input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    loop {
        registry.poll();
        write!(out, "{MENU}")?;
        out.flush()?;

        let Some(line) = next_command(&mut input).await? else {
            return Ok(());
        };
        let mut chars = line.trim_start().chars();
        let Some(choice) = chars.next() else {
            continue;
        };
        let rest = chars.as_str().trim();

        match choice {
            'p' => write!(out, "{}", render_pending(&registry.list_pending()))?,
            'f' => {
                let completed = registry.list_completed();
                write!(out, "{}", render_completed(completed.iter().map(|o| &**o)))?;
            }
            'v' => {
                write!(out, "request id? ")?;
                out.flush()?;
                let Some(text) = argument(rest, &mut input).await? else {
                    return Ok(());
                };
                match text.parse::<RequestId>() {
                    Ok(id) => out.write_all(&render_view(id, registry.get(id).as_deref()))?,
                    Err(_) => writeln!(out, "invalid value")?,
                }
            }
            'a' => {
                write!(out, "url? ")?;
                out.flush()?;
                let Some(url) = argument(rest, &mut input).await? else {
                    return Ok(());
                };
                if url.len() < MIN_URL_LEN {
                    writeln!(out, "url too short")?;
                } else {
                    let id = registry.submit(url);
                    debug!("Console queued request {id}");
                }
            }
            'q' => return Ok(()),
            other => writeln!(out, "invalid choice '{other}'")?,
        }
    }
}

/// One input line without its terminator, or `None` at end of input.
///
/// Bytes that are not UTF-8 are replaced rather than rejected, so stray
/// binary input cannot end the session.
async fn read_line<R>(input: &mut R) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut raw = Vec::new();
    let n = input
        .read_until(b'\n', &mut raw)
        .await
        .context("Failed to read console input")?;
    if n == 0 {
        return Ok(None);
    }
    if raw.last() == Some(&b'\n') {
        raw.pop();
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&raw).into_owned()))
}

/// Next non-blank line, or `None` at end of input.
async fn next_command<R>(input: &mut R) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        match read_line(input).await? {
            Some(line) if line.trim().is_empty() => continue,
            other => return Ok(other),
        }
    }
}

/// `rest` if the command carried an inline argument, else the next line.
async fn argument<R>(rest: &str, input: &mut R) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    if !rest.is_empty() {
        return Ok(Some(rest.to_string()));
    }
    Ok(read_line(input).await?.map(|l| l.trim().to_string()))
}
