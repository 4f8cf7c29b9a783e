//! Build-time catalog.
//!
//! `data/referers.yml` is embedded into the binary and parsed on first use.

use std::sync::{Arc, LazyLock};

use super::Catalog;

const BUNDLED_CATALOG: &str = include_str!("../../data/referers.yml");

static BUNDLED: LazyLock<Arc<Catalog>> = LazyLock::new(|| {
    // The embedded document is checked by tests, so a failure here is a
    // programming error rather than a runtime condition
    let catalog = Catalog::from_yaml(BUNDLED_CATALOG).unwrap_or_else(|e| {
        panic!(
            "Failed to parse bundled referer catalog: {}. This is a programming error.",
            e
        )
    });
    log::debug!(
        "Loaded bundled catalog: {} sources, {} domains",
        catalog.source_count(),
        catalog.domain_count()
    );
    Arc::new(catalog)
});

pub(crate) fn bundled_catalog() -> Arc<Catalog> {
    Arc::clone(&BUNDLED)
}
