//! The catalog store's materialized view.

use serde::{Deserialize, Serialize};

use super::content::ContentRecord;

/// Fetch lifecycle of the catalog.
///
/// Created `Idle`, moves to `Loading` when a refresh starts, then to
/// `Ready` or `Error`. A later refresh re-enters `Loading` without
/// discarding the previously loaded data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogStatus {
    Idle,
    Loading,
    Ready,
    /// Human-readable message from the first failed fetch
    Error(String),
}

impl CatalogStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogStatus::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            CatalogStatus::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Point-in-time copy of the store's state, handed to the presentation
/// layer. Both collections are newest-first as served by the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub all: Vec<ContentRecord>,
    pub featured: Vec<ContentRecord>,
    pub status: CatalogStatus,
}

impl CatalogSnapshot {
    /// The empty, not-yet-fetched snapshot a store starts from.
    pub fn empty() -> Self {
        Self {
            all: Vec::new(),
            featured: Vec::new(),
            status: CatalogStatus::Idle,
        }
    }
}
