//! Pure view derivation over a catalog collection.
//!
//! Every function here is a read-only, order-preserving filter of the
//! slice it is given: no sorting, no mutation, no caching. Collections are
//! small (low thousands), so views are re-derived on every interaction.

use crate::domain::{ContentRecord, ContentType};

/// Pseudo-genre meaning "no genre filter".
pub const GENRE_ALL: &str = "All";

/// Pseudo-genre selecting live channels regardless of their tags.
pub const GENRE_LIVE: &str = "Live";

/// Records matching a genre chip.
///
/// `"All"` is the identity view, `"Live"` selects by content type, and any
/// other value is an exact, case-sensitive match against the record's tag
/// list. Records with an empty tag list simply land in no genre bucket.
pub fn by_genre<'a>(all: &'a [ContentRecord], genre: &str) -> Vec<&'a ContentRecord> {
    match genre {
        GENRE_ALL => all.iter().collect(),
        GENRE_LIVE => all.iter().filter(|r| r.content_type.is_live()).collect(),
        _ => all.iter().filter(|r| r.has_genre(genre)).collect(),
    }
}

/// Records of one content type, for the per-type shelf sections.
pub fn by_type(all: &[ContentRecord], kind: ContentType) -> Vec<&ContentRecord> {
    all.iter().filter(|r| r.content_type == kind).collect()
}

/// Case-insensitive substring search over title, description and genre
/// tags.
///
/// Callers short-circuit an empty query to an empty result set before
/// calling this ("no query, no results"); passed an empty string, the
/// function itself would match everything.
pub fn search<'a>(all: &'a [ContentRecord], query: &str) -> Vec<&'a ContentRecord> {
    let needle = query.to_lowercase();
    all.iter()
        .filter(|r| {
            r.title.to_lowercase().contains(&needle)
                || r.description.to_lowercase().contains(&needle)
                || r.genre.iter().any(|g| g.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Distinct genre tags across the collection, in first-seen order.
/// Feeds the genre chip row; `"All"` and `"Live"` are presentation-side.
pub fn genres(all: &[ContentRecord]) -> Vec<String> {
    let mut seen = Vec::new();
    for record in all {
        for tag in &record.genre {
            if !seen.iter().any(|s| s == tag) {
                seen.push(tag.clone());
            }
        }
    }
    seen
}
