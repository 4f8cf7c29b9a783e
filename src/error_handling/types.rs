//! Error type definitions.
//!
//! Classification itself never fails: malformed and unrecognized referers are
//! ordinary `Attribution` values. The errors here cover obtaining a catalog and
//! setting up the process.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for catalog loading.
///
/// A refresh that fails while a previous snapshot is cached is logged and
/// absorbed by the cache; these surface only when no catalog exists at all.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The HTTP request for the catalog failed (connect, timeout, body).
    #[error("Failed to fetch catalog: {0}")]
    Request(#[from] ReqwestError),

    /// The catalog endpoint answered with a non-success status.
    #[error("Failed to fetch catalog from {url}: HTTP {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// Response status.
        status: reqwest::StatusCode,
    },

    /// The catalog document could not be parsed.
    #[error("Failed to parse catalog document: {0}")]
    Malformed(#[from] serde_yaml::Error),

    /// A local catalog file could not be read.
    #[error("Failed to read catalog file {}: {source}", .path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A concurrent load of the same catalog failed and its outcome was shared.
    #[error("Catalog from {location} is unavailable: {reason}")]
    Unavailable {
        /// Catalog URL or path.
        location: String,
        /// Error reported by the failed load.
        reason: String,
    },
}

impl CatalogError {
    /// Whether retrying the same request could plausibly succeed.
    ///
    /// Connection failures, timeouts, 429 and 5xx are transient. Client errors
    /// and malformed documents are not.
    pub fn is_retriable(&self) -> bool {
        match self {
            CatalogError::Request(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            CatalogError::Status { status, .. } => {
                status.as_u16() == crate::config::HTTP_STATUS_TOO_MANY_REQUESTS
                    || status.is_server_error()
            }
            CatalogError::Malformed(_)
            | CatalogError::Io { .. }
            | CatalogError::Unavailable { .. } => false,
        }
    }
}
