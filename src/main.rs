//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `fetch_status` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - The interactive console on stdin/stdout
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;
use tokio::io::BufReader;
use tokio::runtime::Handle;

use fetch_status::app::{print_error_statistics, run_console};
use fetch_status::initialization::{init_fetch_context, init_logger_with};
use fetch_status::{FetchConfig, Opt, RequestRegistry};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let config = FetchConfig::from(&opt);
    let ctx = match init_fetch_context(&config) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("fetch_status error: {e}");
            process::exit(1);
        }
    };
    let registry = RequestRegistry::new(ctx, Handle::current());

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    if let Err(e) = run_console(&registry, stdin, &mut stdout).await {
        eprintln!("fetch_status error: {e:#}");
        process::exit(1);
    }

    registry.poll();
    print_error_statistics(registry.stats());
    Ok(())
}
