//! Referer classification.
//!
//! The pipeline, first matching rule wins:
//! 1. Empty or missing referer -> `direct`
//! 2. Referer fails to parse -> `invalid`
//! 3. Referer host is the page host or a listed internal host -> `internal`
//! 4. Longest catalog domain suffix -> that source, plus a search term if any
//! 5. Otherwise -> `unknown` with the bare hostname

mod internal;
mod matcher;
mod normalize;
mod term;

use crate::catalog::{Catalog, CatalogProvider, RemoteCatalog};
use crate::config::RemoteConfig;
use crate::error_handling::{CatalogError, InitializationError};
use crate::models::Attribution;

// Re-export public API
pub use internal::is_internal;
pub use matcher::find_match;
pub(crate) use matcher::rule_order;
pub use normalize::{normalize, NormalizeError, Normalized, ParsedUrl};
pub use term::extract_term;

/// Classifies referers against a catalog provider.
///
/// # Example
///
/// ```no_run
/// use referer_parser::{Classifier, Medium, RemoteConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let classifier = Classifier::remote(RemoteConfig::default())?;
/// let attribution = classifier
///     .parse(Some("https://www.google.com/search?q=rust"), None, &[])
///     .await?;
/// assert_eq!(attribution.medium, Medium::Search);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Classifier {
    provider: CatalogProvider,
}

impl Classifier {
    pub fn new(provider: impl Into<CatalogProvider>) -> Self {
        Self {
            provider: provider.into(),
        }
    }

    /// Classifier over the catalog compiled into the crate.
    pub fn bundled() -> Self {
        Self::new(CatalogProvider::bundled())
    }

    /// Classifier over a fetched catalog cached for `config.cache_duration`.
    pub fn remote(config: RemoteConfig) -> Result<Self, InitializationError> {
        Ok(Self::new(RemoteCatalog::new(config)?))
    }

    pub fn provider(&self) -> &CatalogProvider {
        &self.provider
    }

    /// Classifies a referer.
    ///
    /// The catalog refresh check runs first, for every call.
    ///
    /// # Errors
    ///
    /// Only when the provider has no catalog at all (first remote fetch
    /// failed). Bad or unrecognized referers are ordinary results.
    pub async fn parse(
        &self,
        referer: Option<&str>,
        page: Option<&str>,
        internal_domains: &[&str],
    ) -> Result<Attribution, CatalogError> {
        let catalog = self.provider.snapshot().await?;
        Ok(classify_with(&catalog, referer, page, internal_domains))
    }
}

/// Classifies a referer against a given catalog snapshot.
pub fn classify_with(
    catalog: &Catalog,
    referer: Option<&str>,
    page: Option<&str>,
    internal_domains: &[&str],
) -> Attribution {
    let referer = match referer {
        Some(r) if !r.is_empty() => r,
        _ => return Attribution::direct(),
    };

    let Normalized {
        referer: parsed,
        page,
    } = normalize(referer, page);

    let parsed = match parsed {
        Ok(parsed) => parsed,
        Err(e) => {
            log::debug!("Invalid referer {:?}: {}", referer, e);
            return Attribution::invalid();
        }
    };

    if is_internal(&parsed, page.as_ref(), internal_domains) {
        return Attribution::internal();
    }

    match find_match(&parsed, catalog) {
        Some(rule) => Attribution::matched(
            rule.medium.clone(),
            rule.source.clone(),
            extract_term(&parsed, &rule.parameters),
        ),
        None => {
            log::debug!("Unrecognized referer host: {}", parsed.hostname());
            Attribution::unknown(parsed.hostname())
        }
    }
}
