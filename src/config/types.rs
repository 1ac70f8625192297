//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DETAILED_BACKEND_LATENCY, FAST_BACKEND_LATENCY};

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

/// Session configuration.
///
/// Usable programmatically through `Default`, and parsed from the command line
/// by the `devlens` binary.
///
/// # Examples
///
/// ```no_run
/// use devlens::Config;
///
/// let config = Config {
///     fast_latency_ms: 0,
///     detailed_latency_ms: 0,
///     ..Default::default()
/// };
/// ```
///
/// ```bash
/// # Interactive session with a custom catalog and debug logging
/// devlens --catalog ./features.json --log-level debug
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "devlens",
    about = "Detects web platform features in selected code and explains it."
)]
pub struct Config {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Feature catalog JSON file (defaults to the built-in catalog)
    #[arg(long, value_parser)]
    pub catalog: Option<PathBuf>,

    /// Simulated latency of the fast explanation backend, in milliseconds
    #[arg(long, default_value_t = FAST_BACKEND_LATENCY.as_millis() as u64)]
    pub fast_latency_ms: u64,

    /// Simulated latency of the detailed explanation backend, in milliseconds
    #[arg(long, default_value_t = DETAILED_BACKEND_LATENCY.as_millis() as u64)]
    pub detailed_latency_ms: u64,

    /// Disable colored terminal output
    #[arg(long)]
    pub no_color: bool,
}

impl Config {
    /// Latency applied by the fast backend before it resolves.
    pub fn fast_latency(&self) -> Duration {
        Duration::from_millis(self.fast_latency_ms)
    }

    /// Latency applied by the detailed backend before it resolves.
    pub fn detailed_latency(&self) -> Duration {
        Duration::from_millis(self.detailed_latency_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            catalog: None,
            fast_latency_ms: FAST_BACKEND_LATENCY.as_millis() as u64,
            detailed_latency_ms: DETAILED_BACKEND_LATENCY.as_millis() as u64,
            no_color: false,
        }
    }
}
