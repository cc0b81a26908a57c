//! Content entities shared by the store, the query engine, and the backends.
//!
//! Records are immutable once fetched; a refresh replaces the collection
//! wholesale rather than patching individual entries.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque content identifier, stable across fetches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentId(String);

impl ContentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ContentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Identifier of the authenticated user, as reported by the session
/// collaborator. The core never inspects it beyond passing it along.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of content. Closed set; drives section grouping and the player's
/// looping behavior (live streams never loop to the start).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Movie,
    Series,
    Podcast,
    Live,
}

impl ContentType {
    /// True for live channels (the "Live" section and non-seekable playback).
    pub fn is_live(self) -> bool {
        matches!(self, ContentType::Live)
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentType::Movie => write!(f, "movie"),
            ContentType::Series => write!(f, "series"),
            ContentType::Podcast => write!(f, "podcast"),
            ContentType::Live => write!(f, "live"),
        }
    }
}

impl std::str::FromStr for ContentType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "movie" => Ok(ContentType::Movie),
            "series" | "show" => Ok(ContentType::Series),
            "podcast" => Ok(ContentType::Podcast),
            "live" => Ok(ContentType::Live),
            _ => anyhow::bail!("Unknown content type: {}", s),
        }
    }
}

/// One entry in the content catalog.
///
/// Only `id`, `title`, `description`, `type`, `genre`, `thumbnail` and
/// `created_at` are guaranteed present; everything else is descriptive
/// metadata whose absence must never break a derived view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Unique within a collection snapshot
    pub id: ContentId,

    pub title: String,

    pub description: String,

    /// Backend rows call this column `type`
    #[serde(rename = "type")]
    pub content_type: ContentType,

    /// Free-text genre tags; may be empty, in which case the record is
    /// simply absent from every genre bucket
    #[serde(default)]
    pub genre: Vec<String>,

    /// Poster/cover image URL
    pub thumbnail: String,

    /// Media URL; absent until the upload pipeline has resolved one
    #[serde(default)]
    pub video_url: Option<String>,

    /// Display duration, e.g. "2h 15m"
    #[serde(default)]
    pub duration: Option<String>,

    #[serde(default)]
    pub rating: Option<f64>,

    #[serde(default)]
    pub year: Option<u32>,

    #[serde(default)]
    pub language: Vec<String>,

    /// Hero-carousel membership, curated server-side
    #[serde(default)]
    pub featured: bool,

    /// Ordering key; collections are always served newest-first
    pub created_at: DateTime<Utc>,
}

impl ContentRecord {
    /// True if the record carries the given genre tag (exact match).
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genre.iter().any(|g| g == genre)
    }
}

/// A record being submitted for creation. The record store assigns `id`
/// and `created_at`; the workflow fixes `featured` to false.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRecord {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub genre: Vec<String>,
    pub thumbnail: String,
    pub video_url: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub year: Option<u32>,
    pub language: Vec<String>,
    pub featured: bool,
    pub uploaded_by: UserId,
}
