//! Backend interfaces for the catalog.
//!
//! The core talks to its record store only through the [`RecordStore`]
//! trait; the fixture and remote implementations are interchangeable and
//! selected by configuration.

pub mod fixture;
pub mod remote;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{ContentId, ContentRecord, NewRecord, UserId};

// Re-export the backends
pub use fixture::FixtureStore;
pub use remote::{RemoteConfig, RemoteStore};

/// Errors surfaced by record-store backends.
///
/// Fetch failures never propagate past the catalog store; it folds them
/// into the snapshot status instead.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("persist rejected: {0}")]
    Persist(String),

    #[error("request timed out after {0}s")]
    Timeout(u64),
}

/// Read/write contract of the external record store.
///
/// Collections come back newest-first; `fetch_by_id` reports an unknown id
/// as `Ok(None)`, never as an error.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Human-readable backend name
    fn name(&self) -> &str;

    /// Full collection, ordered by creation time descending
    async fn fetch_all(&self) -> Result<Vec<ContentRecord>, StoreError>;

    /// Curated subset with `featured = true`, same ordering
    async fn fetch_featured(&self) -> Result<Vec<ContentRecord>, StoreError>;

    /// Single record lookup
    async fn fetch_by_id(&self, id: &ContentId) -> Result<Option<ContentRecord>, StoreError>;

    /// Persist one new record. The backend assigns id and creation time;
    /// the created record is not returned.
    async fn persist_new(&self, record: NewRecord) -> Result<(), StoreError>;
}

/// The only thing the core needs from authentication: who is signed in.
pub trait Session: Send + Sync {
    fn current_user(&self) -> Option<UserId>;
}

/// Session backed by a configured user id (or none when signed out).
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    user: Option<UserId>,
}

impl StaticSession {
    pub fn signed_in(user: UserId) -> Self {
        Self { user: Some(user) }
    }

    pub fn signed_out() -> Self {
        Self { user: None }
    }
}

impl Session for StaticSession {
    fn current_user(&self) -> Option<UserId> {
        self.user.clone()
    }
}
