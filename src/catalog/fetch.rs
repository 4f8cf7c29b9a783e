//! URL fetching for referer catalogs.

use super::Catalog;
use crate::error_handling::CatalogError;

/// Fetches and parses a catalog document.
///
/// A plain GET with no parameters; any non-2xx status is an error, as is a
/// body that does not parse as a catalog.
pub async fn fetch_catalog(client: &reqwest::Client, url: &str) -> Result<Catalog, CatalogError> {
    log::debug!("Fetching catalog from: {}", url);
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(CatalogError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let document = response.text().await?;
    let catalog = Catalog::from_yaml(&document)?;
    log::debug!(
        "Fetched catalog from {}: {} sources, {} domains",
        url,
        catalog.source_count(),
        catalog.domain_count()
    );
    Ok(catalog)
}
