//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::USER_AGENT;

/// Initializes the HTTP client used for catalog fetches.
///
/// Creates a `reqwest::Client` configured with:
/// - The crate User-Agent
/// - A per-request timeout (a timed-out refresh falls back to the cached catalog)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}
