//! Catalog store: single owner of the content collection, the featured
//! subset and the client-local favorites set.
//!
//! The store is the only component that talks to the record store for
//! reads, and the only one allowed to mutate catalog state. Consumers get
//! cloned [`CatalogSnapshot`]s and derive views with [`crate::query`].

use std::collections::HashSet;
use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use crate::adapters::{RecordStore, StoreError};
use crate::domain::{CatalogSnapshot, CatalogStatus, ContentId, ContentRecord};

/// Bound on each individual fetch; a hung call surfaces as an error
/// instead of leaving the snapshot in `Loading` forever.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

struct State {
    all: Vec<ContentRecord>,
    featured: Vec<ContentRecord>,
    status: CatalogStatus,
    favorites: HashSet<ContentId>,
}

impl State {
    fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            all: self.all.clone(),
            featured: self.featured.clone(),
            status: self.status.clone(),
        }
    }
}

/// Owner of the authoritative catalog state, generic over the record-store
/// backend. Construct one per session and share it by reference.
pub struct CatalogStore<S> {
    backend: S,
    fetch_timeout: Duration,
    state: Mutex<State>,
    /// Serializes refreshes; a second caller awaits the holder instead of
    /// issuing duplicate fetches.
    refresh_gate: tokio::sync::Mutex<()>,
}

impl<S: RecordStore> CatalogStore<S> {
    pub fn new(backend: S) -> Self {
        Self::with_fetch_timeout(backend, DEFAULT_FETCH_TIMEOUT)
    }

    pub fn with_fetch_timeout(backend: S, fetch_timeout: Duration) -> Self {
        Self {
            backend,
            fetch_timeout,
            state: Mutex::new(State {
                all: Vec::new(),
                featured: Vec::new(),
                status: CatalogStatus::Idle,
                favorites: HashSet::new(),
            }),
            refresh_gate: tokio::sync::Mutex::new(()),
        }
    }

    /// The record-store backend, shared with the creation workflow.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Current materialized view.
    pub fn snapshot(&self) -> CatalogSnapshot {
        self.state.lock().expect("state lock poisoned").snapshot()
    }

    /// Fetch the full collection and the featured subset concurrently and
    /// apply the results per field.
    ///
    /// Either fetch may fail independently: the failed field retains its
    /// last-good value and the snapshot status carries the first error
    /// message, while the successful field is still applied. A refresh
    /// requested while one is in flight coalesces into it.
    #[instrument(skip(self), fields(backend = self.backend.name()))]
    pub async fn refresh(&self) -> CatalogSnapshot {
        let _gate = match self.refresh_gate.try_lock() {
            Ok(gate) => gate,
            Err(_) => {
                debug!("refresh already in flight, coalescing");
                let _wait = self.refresh_gate.lock().await;
                return self.snapshot();
            }
        };

        {
            let mut state = self.state.lock().expect("state lock poisoned");
            state.status = CatalogStatus::Loading;
        }

        let (all, featured) = tokio::join!(
            self.bounded(self.backend.fetch_all()),
            self.bounded(self.backend.fetch_featured()),
        );

        let mut state = self.state.lock().expect("state lock poisoned");
        let mut first_error: Option<String> = None;

        match all {
            Ok(records) => state.all = records,
            Err(e) => {
                warn!(error = %e, "all-content fetch failed");
                first_error.get_or_insert(e.to_string());
            }
        }
        match featured {
            Ok(records) => state.featured = records,
            Err(e) => {
                warn!(error = %e, "featured-content fetch failed");
                first_error.get_or_insert(e.to_string());
            }
        }

        state.status = match first_error {
            Some(message) => CatalogStatus::Error(message),
            None => CatalogStatus::Ready,
        };

        info!(
            total = state.all.len(),
            featured = state.featured.len(),
            "catalog refreshed"
        );
        state.snapshot()
    }

    /// Single-record lookup, bounded by the fetch timeout. An unknown id
    /// is `Ok(None)`; the playback screen falls back instead of crashing.
    pub async fn content_by_id(
        &self,
        id: &ContentId,
    ) -> Result<Option<ContentRecord>, StoreError> {
        self.bounded(self.backend.fetch_by_id(id)).await
    }

    /// Flip favorite membership for an id. Client-local and infallible;
    /// an id not present in the collection is still recorded, in case the
    /// record arrives on a later refresh.
    pub fn toggle_favorite(&self, id: &ContentId) {
        let mut state = self.state.lock().expect("state lock poisoned");
        if !state.favorites.remove(id) {
            state.favorites.insert(id.clone());
        }
    }

    /// O(1) favorite membership test.
    pub fn is_favorite(&self, id: &ContentId) -> bool {
        self.state
            .lock()
            .expect("state lock poisoned")
            .favorites
            .contains(id)
    }

    /// Favorited records in collection order (newest first). Ids marked
    /// favorite but absent from the collection are silently omitted.
    pub fn favorites(&self) -> Vec<ContentRecord> {
        let state = self.state.lock().expect("state lock poisoned");
        state
            .all
            .iter()
            .filter(|r| state.favorites.contains(&r.id))
            .cloned()
            .collect()
    }

    /// Distinct genre tags of the current collection, for the chip row.
    pub fn genres(&self) -> Vec<String> {
        let state = self.state.lock().expect("state lock poisoned");
        crate::query::genres(&state.all)
    }

    async fn bounded<T>(
        &self,
        fut: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        match tokio::time::timeout(self.fetch_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::Timeout(self.fetch_timeout.as_secs())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::FixtureStore;

    #[tokio::test]
    async fn test_store_starts_idle_and_empty() {
        let store = CatalogStore::new(FixtureStore::with_sample_data());
        let snapshot = store.snapshot();

        assert_eq!(snapshot.status, CatalogStatus::Idle);
        assert!(snapshot.all.is_empty());
        assert!(snapshot.featured.is_empty());
    }

    #[tokio::test]
    async fn test_refresh_populates_both_fields() {
        let store = CatalogStore::new(FixtureStore::with_sample_data());
        let snapshot = store.refresh().await;

        assert_eq!(snapshot.status, CatalogStatus::Ready);
        assert_eq!(snapshot.all.len(), 9);
        assert_eq!(snapshot.featured.len(), 3);
    }

    #[tokio::test]
    async fn test_favorite_toggle_before_refresh_is_retained() {
        let store = CatalogStore::new(FixtureStore::with_sample_data());
        let id = ContentId::from("inception");

        // Favoriting an id the store has not loaded yet is recorded
        store.toggle_favorite(&id);
        assert!(store.is_favorite(&id));
        assert!(store.favorites().is_empty());

        store.refresh().await;
        let favorites = store.favorites();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].id, id);
    }

    #[tokio::test]
    async fn test_genres_follow_collection() {
        let store = CatalogStore::new(FixtureStore::with_sample_data());
        assert!(store.genres().is_empty());

        store.refresh().await;
        let genres = store.genres();
        assert!(genres.iter().any(|g| g == "Action"));
        assert!(genres.iter().any(|g| g == "News"));
    }
}
