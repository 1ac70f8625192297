//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `devlens` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Reading selections and commands from stdin
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::io::Write;
use std::process;
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use devlens::config::SESSION_EVENT_BUFFER;
use devlens::display::TerminalSink;
use devlens::initialization::{init_catalog, init_logger_with};
use devlens::session::read_events;
use devlens::{run_session, Config};

const USAGE: &str = "Paste or type code to select it. Commands: :fast  :detailed  :clear  :close  :show  :quit";

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    if config.no_color {
        colored::control::set_override(false);
    }

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let catalog = init_catalog(&config)
        .await
        .context("Failed to initialize feature catalog")?;

    let (tx, rx) = mpsc::channel(SESSION_EVENT_BUFFER);
    let cancel = CancellationToken::new();

    let input_task = tokio::spawn(async move {
        if let Err(e) = read_events(BufReader::new(tokio::io::stdin()), tx).await {
            log::error!("{:#}", e);
        }
    });

    let ctrl_c_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::info!("Interrupted");
            ctrl_c_cancel.cancel();
        }
    });

    println!("{}", USAGE.dimmed());

    match run_session(&config, catalog, TerminalSink::stdout(), rx, cancel).await {
        Ok(report) => {
            input_task.abort();
            println!();
            print!("{}", report.to_string().bold());
            if let Err(e) = std::io::stdout().flush() {
                log::warn!("Failed to flush session summary: {}", e);
            }
            // A blocking stdin read would otherwise hold up runtime shutdown
            process::exit(0);
        }
        Err(e) => {
            eprintln!("devlens error: {:#}", e);
            process::exit(1);
        }
    }
}
