//! referer_parser library: HTTP referer attribution
//!
//! Classifies a referer URL against a catalog of known sources and reports the
//! traffic medium (search, social, email, internal, direct, unknown, invalid,
//! ...), the source display name and, for search engines, the search term.
//!
//! # Example
//!
//! ```
//! use referer_parser::{parse, Medium};
//!
//! let attribution = parse(Some("http://www.google.com/search?q=test"), None, &[]);
//! assert_eq!(attribution.medium, Medium::Search);
//! assert_eq!(attribution.referer.as_deref(), Some("Google"));
//! assert_eq!(attribution.term.as_deref(), Some("test"));
//! ```
//!
//! The bundled catalog needs no network access. For a remotely maintained
//! catalog, build a [`Classifier`] over a [`RemoteCatalog`], which caches the
//! fetched table and keeps serving the previous one if a refresh fails.
//! Remote classification requires a Tokio runtime.

pub mod catalog;
pub mod classify;
pub mod config;
mod error_handling;
pub mod initialization;
mod models;

// Re-export public API
pub use catalog::{Catalog, CatalogProvider, Clock, RemoteCatalog, SourceEntry, SystemClock};
pub use classify::{classify_with, Classifier};
pub use config::{LogFormat, LogLevel, RemoteConfig};
pub use error_handling::{CatalogError, InitializationError};
pub use models::{Attribution, Medium};

/// Classifies a referer against the bundled catalog.
///
/// `page` is the URL of the page that received the visit; with it, relative
/// referers are resolved and same-site referrals report `internal`.
/// `internal_domains` lists further hosts (exact, including any port) to
/// treat as internal.
pub fn parse(referer: Option<&str>, page: Option<&str>, internal_domains: &[&str]) -> Attribution {
    classify_with(&Catalog::bundled(), referer, page, internal_domains)
}
