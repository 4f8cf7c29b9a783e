//! Time-based cache for a remotely sourced catalog.
//!
//! The cache is an ordinary value owned by the caller. Each snapshot is an
//! immutable `Arc<Catalog>` swapped in whole, so readers never see a partially
//! updated table. Refreshes are single-flight: callers that find the cache
//! stale queue on one lock, and whoever gets it second finds the fresh
//! snapshot instead of fetching again. When the attempt they queued behind
//! fails, they share its outcome rather than fetching one after another.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::{Mutex, RwLock};
use tokio_retry::RetryIf;

use super::clock::{Clock, SystemClock};
use super::fetch::fetch_catalog;
use super::local::load_from_path;
use super::Catalog;
use crate::config::RemoteConfig;
use crate::error_handling::{get_retry_strategy, CatalogError, InitializationError};
use crate::initialization::init_client;

#[derive(Debug)]
struct CachedCatalog {
    catalog: Arc<Catalog>,
    fetched_at: Instant,
}

/// When a stale snapshot may next be refreshed after a failed attempt.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum RetryAfter {
    #[default]
    Now,
    At(Instant),
    /// The backoff does not fit in an `Instant`; serve the stale snapshot
    /// until the cache is dropped.
    Never,
}

#[derive(Debug, Default)]
struct CacheState {
    snapshot: Option<CachedCatalog>,
    retry_after: RetryAfter,
    /// Completed load attempts, successful or not.
    attempts: u64,
    /// Message of the last failed attempt, cleared by a successful one.
    last_failure: Option<String>,
}

/// Remote catalog with a time-based in-memory cache.
#[derive(Debug)]
pub struct RemoteCatalog {
    config: RemoteConfig,
    client: reqwest::Client,
    clock: Arc<dyn Clock>,
    state: RwLock<CacheState>,
    refresh: Mutex<()>,
}

impl RemoteCatalog {
    /// Creates an empty cache; nothing is fetched until the first snapshot.
    pub fn new(config: RemoteConfig) -> Result<Self, InitializationError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(
        config: RemoteConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, InitializationError> {
        let client = init_client(config.fetch_timeout)?;
        Ok(Self {
            config,
            client,
            clock,
            state: RwLock::new(CacheState::default()),
            refresh: Mutex::new(()),
        })
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    /// Returns the current catalog, refreshing it first if it is stale.
    ///
    /// # Errors
    ///
    /// Only when the refresh fails and no catalog has ever been loaded. A
    /// failed refresh over an existing snapshot logs a warning and returns the
    /// stale snapshot. Callers that were queued behind a failed first load get
    /// `CatalogError::Unavailable` without fetching again.
    pub async fn snapshot(&self) -> Result<Arc<Catalog>, CatalogError> {
        let seen = {
            let state = self.state.read().await;
            if let Some(catalog) = self.usable(&state) {
                return Ok(catalog);
            }
            state.attempts
        };

        let _guard = self.refresh.lock().await;

        {
            let state = self.state.read().await;
            if let Some(catalog) = self.usable(&state) {
                return Ok(catalog);
            }
            // An attempt finished while we waited for the lock: share its outcome
            if state.attempts != seen {
                if let Some(cached) = &state.snapshot {
                    return Ok(Arc::clone(&cached.catalog));
                }
                if let Some(reason) = &state.last_failure {
                    return Err(CatalogError::Unavailable {
                        location: self.config.source.clone(),
                        reason: reason.clone(),
                    });
                }
            }
        }

        let result = self.load().await;
        let mut state = self.state.write().await;
        state.attempts += 1;

        match result {
            Ok(catalog) => {
                let catalog = Arc::new(catalog);
                state.snapshot = Some(CachedCatalog {
                    catalog: Arc::clone(&catalog),
                    fetched_at: self.clock.now(),
                });
                state.retry_after = RetryAfter::Now;
                state.last_failure = None;
                log::info!(
                    "Refreshed referer catalog from {} ({} sources)",
                    self.config.source,
                    catalog.source_count()
                );
                Ok(catalog)
            }
            Err(e) => {
                state.last_failure = Some(e.to_string());
                match state.snapshot.as_ref().map(|cached| Arc::clone(&cached.catalog)) {
                    Some(stale) => {
                        log::warn!(
                            "Failed to refresh referer catalog from {}: {}. Serving cached catalog.",
                            self.config.source,
                            e
                        );
                        state.retry_after = match self
                            .clock
                            .now()
                            .checked_add(self.config.failure_backoff)
                        {
                            Some(until) => RetryAfter::At(until),
                            None => RetryAfter::Never,
                        };
                        Ok(stale)
                    }
                    None => {
                        log::error!(
                            "Failed to load referer catalog from {}: {}",
                            self.config.source,
                            e
                        );
                        Err(e)
                    }
                }
            }
        }
    }

    /// The cached snapshot regardless of age, without triggering a refresh.
    pub async fn cached(&self) -> Option<Arc<Catalog>> {
        let state = self.state.read().await;
        state.snapshot.as_ref().map(|cached| Arc::clone(&cached.catalog))
    }

    /// Cached snapshot if it is fresh, or stale but inside the failure backoff.
    fn usable(&self, state: &CacheState) -> Option<Arc<Catalog>> {
        let cached = state.snapshot.as_ref()?;
        let now = self.clock.now();

        let fresh = now.saturating_duration_since(cached.fetched_at) < self.config.cache_duration;
        let backing_off = match state.retry_after {
            RetryAfter::Now => false,
            RetryAfter::At(until) => now < until,
            RetryAfter::Never => true,
        };

        if fresh || backing_off {
            log::debug!("Serving cached referer catalog");
            Some(Arc::clone(&cached.catalog))
        } else {
            None
        }
    }

    async fn load(&self) -> Result<Catalog, CatalogError> {
        let source = self.config.source.as_str();
        if !(source.starts_with("http://") || source.starts_with("https://")) {
            return load_from_path(Path::new(source)).await;
        }

        RetryIf::spawn(
            get_retry_strategy(self.config.retry_attempts),
            || fetch_catalog(&self.client, source),
            |e: &CatalogError| {
                let retriable = e.is_retriable();
                if retriable {
                    log::debug!("Retrying catalog fetch from {} after: {}", source, e);
                }
                retriable
            },
        )
        .await
    }
}
