//! reelcast - streaming content catalog engine
//!
//! Holds an in-memory content collection, derives filtered, sectioned and
//! searched views from it, tracks a client-local favorites set, and
//! reconciles all of that with asynchronous fetches from a pluggable
//! record store.
//!
//! # Architecture
//!
//! - `domain`: Data structures (ContentRecord, CatalogSnapshot)
//! - `adapters`: Record-store backends (fixture, remote) behind one trait
//! - `store`: CatalogStore, the single owner of catalog state
//! - `query`: Pure, order-preserving view derivation
//! - `publish`: Content creation workflow (validate + submit)
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Browse the demo catalog
//! reelcast list
//!
//! # Filter and search
//! reelcast genre Action
//! reelcast search "dark"
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod publish;
pub mod query;
pub mod store;

// Re-export main types at crate root for convenience
pub use adapters::{
    FixtureStore, RecordStore, RemoteConfig, RemoteStore, Session, StaticSession, StoreError,
};
pub use config::{BackendKind, Config};
pub use domain::{
    CatalogSnapshot, CatalogStatus, ContentId, ContentRecord, ContentType, NewRecord, UserId,
};
pub use publish::{publish_content, ContentDraft, PublishError};
pub use store::CatalogStore;
