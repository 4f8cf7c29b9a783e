//! Retry strategy for catalog fetches.

use std::time::Duration;
use tokio_retry::strategy::ExponentialBackoff;

use crate::config::{RETRY_BACKOFF_BASE, RETRY_DELAY_UNIT_MS, RETRY_MAX_DELAY_SECS};

/// Creates an exponential backoff retry strategy.
///
/// Returns a retry strategy configured with:
/// - Delays of `RETRY_DELAY_UNIT_MS * RETRY_BACKOFF_BASE^n` milliseconds
/// - Maximum delay: `RETRY_MAX_DELAY_SECS` seconds
/// - At most `retries` delays (so `retries + 1` attempts in total)
pub fn get_retry_strategy(retries: usize) -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(RETRY_BACKOFF_BASE)
        .factor(RETRY_DELAY_UNIT_MS)
        .max_delay(Duration::from_secs(RETRY_MAX_DELAY_SECS))
        .take(retries)
}
