//! Catalog provider selection.

use std::sync::Arc;

use super::cache::RemoteCatalog;
use super::Catalog;
use crate::error_handling::CatalogError;

/// Where the classifier gets its catalog snapshot from.
///
/// The classifier only ever asks for the current snapshot; how it is obtained
/// is fixed when the provider is constructed.
#[derive(Debug)]
pub enum CatalogProvider {
    /// A fixed table, typically the bundled one. Never fails.
    Static(Arc<Catalog>),
    /// A fetched table behind a time-based cache.
    Remote(RemoteCatalog),
}

impl CatalogProvider {
    pub fn bundled() -> Self {
        CatalogProvider::Static(Catalog::bundled())
    }

    /// Current catalog snapshot; for `Remote` this runs the refresh check.
    pub async fn snapshot(&self) -> Result<Arc<Catalog>, CatalogError> {
        match self {
            CatalogProvider::Static(catalog) => Ok(Arc::clone(catalog)),
            CatalogProvider::Remote(remote) => remote.snapshot().await,
        }
    }
}

impl From<Catalog> for CatalogProvider {
    fn from(catalog: Catalog) -> Self {
        CatalogProvider::Static(Arc::new(catalog))
    }
}

impl From<RemoteCatalog> for CatalogProvider {
    fn from(remote: RemoteCatalog) -> Self {
        CatalogProvider::Remote(remote)
    }
}
