//! Domain types for the reelcast catalog.
//!
//! This module contains the core data structures:
//! - ContentRecord: one catalog entry (movie, series, podcast, live channel)
//! - NewRecord: a record being submitted for creation
//! - CatalogSnapshot: the store's materialized view plus fetch status

pub mod content;
pub mod snapshot;

// Re-export commonly used types
pub use content::{ContentId, ContentRecord, ContentType, NewRecord, UserId};
pub use snapshot::{CatalogSnapshot, CatalogStatus};
