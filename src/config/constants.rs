//! Configuration constants.
//!
//! This module defines the defaults used for catalog loading and refresh.

use std::time::Duration;

/// Default remote catalog location (Snowplow referer-parser YAML table).
pub const DEFAULT_CATALOG_URL: &str =
    "https://s3-eu-west-1.amazonaws.com/snowplow-hosted-assets/third-party/referer-parser/referers-latest.yaml";

/// How long a fetched catalog is served before a refresh is attempted.
/// The upstream table changes rarely; one day keeps fetches to a trickle.
pub const CACHE_DURATION: Duration = Duration::from_secs(24 * 60 * 60);

/// HTTP timeout for a single catalog request.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// After a failed refresh, how long the stale catalog is served before the
/// next attempt.
pub const FAILURE_BACKOFF: Duration = Duration::from_secs(5 * 60);

/// User-Agent sent with catalog requests.
pub const USER_AGENT: &str = concat!("referer_parser/", env!("CARGO_PKG_VERSION"));

// Retry strategy
// The n-th delay (n starting at 1) is RETRY_DELAY_UNIT_MS * RETRY_BACKOFF_BASE^n: 200ms, 400ms, 800ms, ...
/// Growth base of the exponential backoff
pub const RETRY_BACKOFF_BASE: u64 = 2;
/// Delay unit in milliseconds the backoff is multiplied by
pub const RETRY_DELAY_UNIT_MS: u64 = 100;
/// Maximum delay between retries in seconds
pub const RETRY_MAX_DELAY_SECS: u64 = 5;
/// Retries after the first failed attempt (0 = single attempt)
pub const DEFAULT_RETRY_ATTEMPTS: usize = 0;

// HTTP status codes (for clarity and consistency)
pub const HTTP_STATUS_TOO_MANY_REQUESTS: u16 = 429;
