//! Content creation workflow: validate caller-supplied metadata and
//! submit one new record to the record store.
//!
//! Uploading the media bytes and resolving them to public URLs is the
//! upload collaborator's job; this workflow only accepts resolved URLs.
//! The collection is never updated optimistically from a creation result;
//! new records appear on the next explicit refresh.

use thiserror::Error;
use tracing::{info, instrument};

use crate::adapters::{RecordStore, StoreError};
use crate::domain::{ContentType, NewRecord, UserId};

/// Errors from the creation workflow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PublishError {
    /// A required field is empty or absent; raised before any backend call
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The record store rejected the write
    #[error("persist rejected: {0}")]
    Persist(String),
}

/// Caller-supplied metadata for a new record, with media URLs already
/// resolved by the upload collaborator.
#[derive(Debug, Clone, Default)]
pub struct ContentDraft {
    pub title: String,
    pub description: String,
    pub content_type: Option<ContentType>,
    pub genre: Vec<String>,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub duration: Option<String>,
    pub rating: Option<f64>,
    pub year: Option<u32>,
    pub language: Vec<String>,
}

impl ContentDraft {
    /// Check required fields, naming the first one missing.
    fn validate(&self) -> Result<(), PublishError> {
        if self.title.trim().is_empty() {
            return Err(PublishError::MissingField("title"));
        }
        if self.description.trim().is_empty() {
            return Err(PublishError::MissingField("description"));
        }
        if self.content_type.is_none() {
            return Err(PublishError::MissingField("type"));
        }
        if self.genre.is_empty() {
            return Err(PublishError::MissingField("genre"));
        }
        if self.video_url.as_deref().map_or(true, |u| u.trim().is_empty()) {
            return Err(PublishError::MissingField("video_url"));
        }
        if self
            .thumbnail_url
            .as_deref()
            .map_or(true, |u| u.trim().is_empty())
        {
            return Err(PublishError::MissingField("thumbnail"));
        }
        Ok(())
    }
}

/// Validate a draft and submit it.
///
/// New content is never auto-featured, and `language` defaults to English
/// when the caller supplied none. Succeeds with no created id; the caller
/// redirects and refreshes.
#[instrument(skip(store, draft), fields(title = %draft.title))]
pub async fn publish_content<S: RecordStore>(
    store: &S,
    draft: ContentDraft,
    creator: &UserId,
) -> Result<(), PublishError> {
    draft.validate()?;

    let language = if draft.language.is_empty() {
        vec!["English".to_string()]
    } else {
        draft.language
    };

    let record = NewRecord {
        title: draft.title,
        description: draft.description,
        // Validated above
        content_type: draft.content_type.ok_or(PublishError::MissingField("type"))?,
        genre: draft.genre,
        thumbnail: draft.thumbnail_url.ok_or(PublishError::MissingField("thumbnail"))?,
        video_url: draft.video_url.ok_or(PublishError::MissingField("video_url"))?,
        duration: draft.duration,
        rating: draft.rating,
        year: draft.year,
        language,
        featured: false,
        uploaded_by: creator.clone(),
    };

    store.persist_new(record).await.map_err(|e| match e {
        StoreError::Persist(msg) => PublishError::Persist(msg),
        other => PublishError::Persist(other.to_string()),
    })?;

    info!("content record persisted");
    Ok(())
}
