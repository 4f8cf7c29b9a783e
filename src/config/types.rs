//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and remote catalog configuration.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    CACHE_DURATION, DEFAULT_CATALOG_URL, DEFAULT_RETRY_ATTEMPTS, FAILURE_BACKOFF, FETCH_TIMEOUT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
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
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Remote catalog configuration.
///
/// # Examples
///
/// ```no_run
/// use referer_parser::RemoteConfig;
/// use std::time::Duration;
///
/// let config = RemoteConfig {
///     cache_duration: Duration::from_secs(3600),
///     retry_attempts: 2,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Catalog URL (http/https) or local file path
    pub source: String,

    /// Age after which a cached catalog is refreshed
    pub cache_duration: Duration,

    /// Per-request HTTP timeout
    pub fetch_timeout: Duration,

    /// Retries after a failed fetch attempt (transient errors only)
    pub retry_attempts: usize,

    /// Wait after a failed refresh before trying again while serving the stale catalog
    pub failure_backoff: Duration,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_CATALOG_URL.to_string(),
            cache_duration: CACHE_DURATION,
            fetch_timeout: FETCH_TIMEOUT,
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            failure_backoff: FAILURE_BACKOFF,
        }
    }
}

/// Command-line options for the `referer-parser` binary.
#[derive(Debug, Parser)]
#[command(
    name = "referer-parser",
    about = "Classify an HTTP referer into medium, source and search term"
)]
pub struct Opt {
    /// Referer URL to classify (empty string means direct traffic)
    pub referer: String,

    /// URL of the page that received the visit (enables internal detection
    /// and relative referer resolution)
    #[arg(long)]
    pub page: Option<String>,

    /// Host (with port, if any) to treat as internal; may be repeated
    #[arg(long = "internal")]
    pub internal_domains: Vec<String>,

    /// Catalog URL or local YAML/JSON path; the bundled catalog is used when omitted
    #[arg(long)]
    pub catalog: Option<String>,

    /// Retries for a failed remote catalog fetch
    #[arg(long, default_value_t = DEFAULT_RETRY_ATTEMPTS)]
    pub retries: usize,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, ignore_case = true, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, ignore_case = true, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Opt {
    /// Remote catalog configuration, if `--catalog` was given.
    pub fn remote_config(&self) -> Option<RemoteConfig> {
        self.catalog.as_ref().map(|source| RemoteConfig {
            source: source.clone(),
            retry_attempts: self.retries,
            ..Default::default()
        })
    }
}
