//! Referer catalog loading and caching.
//!
//! This module handles:
//! - Parsing the medium -> source -> {domains, parameters} table
//! - Building the longest-suffix-first domain index for each snapshot
//! - The bundled catalog, local catalog files and remote fetching
//! - The time-based remote cache with stale-on-failure fallback

mod bundled;
mod cache;
mod clock;
mod fetch;
mod local;
mod provider;

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};

use crate::classify::rule_order;
use crate::error_handling::CatalogError;
use crate::models::Medium;

pub use cache::RemoteCatalog;
pub use clock::{Clock, SystemClock};
pub use fetch::fetch_catalog;
pub use provider::CatalogProvider;

/// Raw catalog table as it appears in the document.
pub type CatalogTable = BTreeMap<String, BTreeMap<String, SourceEntry>>;

/// Domains and term parameters for one (medium, source) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEntry {
    /// Hostname suffixes identifying the source.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub domains: Vec<String>,
    /// Query parameters that may carry a search term, in priority order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub parameters: Vec<String>,
}

/// `parameters:` with no value is null in YAML; treat it as an empty list.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// One domain suffix of one source, flattened out of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainRule {
    pub medium: Medium,
    pub source: String,
    pub domain: String,
    pub parameters: Arc<[String]>,
}

/// Immutable catalog snapshot.
///
/// `rules` is sorted once at construction: domain length descending, then
/// medium, source and domain lexically, so equal-length domains shared by two
/// sources always resolve the same way.
#[derive(Debug, Clone)]
pub struct Catalog {
    table: CatalogTable,
    rules: Vec<DomainRule>,
}

impl Catalog {
    pub fn new(table: CatalogTable) -> Self {
        let mut rules = Vec::new();

        for (medium_name, sources) in &table {
            let medium = Medium::from(medium_name.as_str());
            for (source, entry) in sources {
                if entry.domains.is_empty() {
                    log::debug!("Catalog source {}/{} has no domains", medium_name, source);
                    continue;
                }
                let parameters: Arc<[String]> = entry.parameters.clone().into();
                for domain in &entry.domains {
                    // An empty suffix would match every hostname
                    if domain.is_empty() {
                        log::warn!(
                            "Skipping empty domain in catalog source {}/{}",
                            medium_name,
                            source
                        );
                        continue;
                    }
                    rules.push(DomainRule {
                        medium: medium.clone(),
                        source: source.clone(),
                        domain: domain.clone(),
                        parameters: Arc::clone(&parameters),
                    });
                }
            }
        }

        rules.sort_by(rule_order);

        Self { table, rules }
    }

    /// Parses a catalog document. YAML is expected; JSON parses as well.
    pub fn from_yaml(document: &str) -> Result<Self, CatalogError> {
        let table: CatalogTable = serde_yaml::from_str(document)?;
        Ok(Self::new(table))
    }

    /// The catalog compiled into the crate.
    pub fn bundled() -> Arc<Catalog> {
        bundled::bundled_catalog()
    }

    /// Loads a catalog from a local YAML or JSON file.
    pub async fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, CatalogError> {
        local::load_from_path(path.as_ref()).await
    }

    /// Domain rules, longest domain first.
    pub fn rules(&self) -> &[DomainRule] {
        &self.rules
    }

    pub fn table(&self) -> &CatalogTable {
        &self.table
    }

    /// Looks up a source entry by medium and source display name.
    pub fn source(&self, medium: &str, source: &str) -> Option<&SourceEntry> {
        self.table.get(medium)?.get(source)
    }

    /// Number of (medium, source) pairs.
    pub fn source_count(&self) -> usize {
        self.table.values().map(BTreeMap::len).sum()
    }

    /// Number of domain rules across all sources.
    pub fn domain_count(&self) -> usize {
        self.rules.len()
    }
}
