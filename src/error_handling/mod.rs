//! Error handling.
//!
//! This module provides:
//! - Error type definitions for catalog loading and initialization
//! - The retry strategy used when fetching a remote catalog

mod retry;
mod types;

// Re-export public API
pub use retry::get_retry_strategy;
pub use types::{CatalogError, InitializationError};
