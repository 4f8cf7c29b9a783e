//! Local file loading for referer catalogs.

use std::path::Path;
use tokio::fs;

use super::Catalog;
use crate::error_handling::CatalogError;

/// Loads a catalog from a local YAML or JSON file.
pub(crate) async fn load_from_path(path: &Path) -> Result<Catalog, CatalogError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let catalog = Catalog::from_yaml(&content)?;
    log::debug!(
        "Loaded catalog from {}: {} sources",
        path.display(),
        catalog.source_count()
    );
    Ok(catalog)
}
