//! In-memory record store seeded with a small demo catalog.
//!
//! Used when no remote backend is configured, and as the default backend
//! in tests. Behaves like the remote store: collections come back
//! newest-first and persisted records only become visible on a later fetch.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::{ContentId, ContentRecord, ContentType, NewRecord};

use super::{RecordStore, StoreError};

/// Fixture backend over a mutex-guarded record list.
pub struct FixtureStore {
    records: Mutex<Vec<ContentRecord>>,
}

impl FixtureStore {
    /// Empty store.
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Store pre-loaded with the given records.
    pub fn with_records(records: Vec<ContentRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    /// Store pre-loaded with the demo catalog.
    pub fn with_sample_data() -> Self {
        Self::with_records(sample_records())
    }

    fn sorted_newest_first(&self) -> Vec<ContentRecord> {
        let mut records = self.records.lock().expect("fixture lock poisoned").clone();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records
    }
}

impl Default for FixtureStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for FixtureStore {
    fn name(&self) -> &str {
        "fixture"
    }

    async fn fetch_all(&self) -> Result<Vec<ContentRecord>, StoreError> {
        Ok(self.sorted_newest_first())
    }

    async fn fetch_featured(&self) -> Result<Vec<ContentRecord>, StoreError> {
        Ok(self
            .sorted_newest_first()
            .into_iter()
            .filter(|r| r.featured)
            .collect())
    }

    async fn fetch_by_id(&self, id: &ContentId) -> Result<Option<ContentRecord>, StoreError> {
        let records = self.records.lock().expect("fixture lock poisoned");
        Ok(records.iter().find(|r| &r.id == id).cloned())
    }

    async fn persist_new(&self, record: NewRecord) -> Result<(), StoreError> {
        let mut records = self.records.lock().expect("fixture lock poisoned");
        records.push(ContentRecord {
            id: ContentId::new(Uuid::new_v4().to_string()),
            title: record.title,
            description: record.description,
            content_type: record.content_type,
            genre: record.genre,
            thumbnail: record.thumbnail,
            video_url: Some(record.video_url),
            duration: record.duration,
            rating: record.rating,
            year: record.year,
            language: record.language,
            featured: record.featured,
            created_at: Utc::now(),
        });
        Ok(())
    }
}

/// Demo catalog: a few movies, a podcast and a live channel, with three
/// featured entries for the hero carousel.
pub fn sample_records() -> Vec<ContentRecord> {
    let base = Utc::now() - Duration::days(30);
    let record = |offset_days: i64,
                  id: &str,
                  title: &str,
                  description: &str,
                  content_type: ContentType,
                  genre: &[&str],
                  duration: Option<&str>,
                  rating: Option<f64>,
                  year: Option<u32>,
                  featured: bool| ContentRecord {
        id: ContentId::from(id),
        title: title.to_string(),
        description: description.to_string(),
        content_type,
        genre: genre.iter().map(|g| g.to_string()).collect(),
        thumbnail: format!("https://images.example/{id}.jpg"),
        video_url: Some(format!("https://media.example/{id}.mp4")),
        duration: duration.map(String::from),
        rating,
        year,
        language: vec!["English".to_string()],
        featured,
        created_at: base + Duration::days(offset_days),
    };

    vec![
        record(
            1,
            "mistress-of-evil",
            "Maleficent: Mistress of Evil",
            "A powerful fairy and her goddaughter face new challenges.",
            ContentType::Movie,
            &["Adventure", "Fantasy"],
            Some("2h 15m"),
            Some(7.5),
            Some(2019),
            true,
        ),
        record(
            2,
            "dark-knight",
            "The Dark Knight",
            "Batman faces his greatest challenge against the Joker.",
            ContentType::Movie,
            &["Action", "Drama"],
            Some("2h 32m"),
            Some(9.0),
            Some(2008),
            true,
        ),
        record(
            3,
            "inception",
            "Inception",
            "A thief who steals secrets through dream-sharing technology.",
            ContentType::Movie,
            &["Sci-Fi", "Action"],
            Some("2h 28m"),
            Some(8.8),
            Some(2010),
            true,
        ),
        record(
            4,
            "fury-road",
            "Mad Max: Fury Road",
            "A post-apocalyptic action adventure.",
            ContentType::Movie,
            &["Action", "Adventure"],
            Some("2h 0m"),
            Some(8.1),
            Some(2015),
            false,
        ),
        record(
            5,
            "grand-budapest",
            "The Grand Budapest Hotel",
            "Adventures of a legendary concierge.",
            ContentType::Movie,
            &["Comedy", "Drama"],
            Some("1h 40m"),
            Some(8.1),
            Some(2014),
            false,
        ),
        record(
            6,
            "shawshank",
            "The Shawshank Redemption",
            "Two imprisoned men bond over years.",
            ContentType::Movie,
            &["Drama"],
            Some("2h 22m"),
            Some(9.3),
            Some(1994),
            false,
        ),
        record(
            7,
            "tech-talk-daily",
            "Tech Talk Daily",
            "Latest news and trends in technology.",
            ContentType::Podcast,
            &["Technology"],
            Some("45m"),
            Some(4.5),
            None,
            false,
        ),
        record(
            8,
            "true-crime-stories",
            "True Crime Stories",
            "Deep dives into real crime cases.",
            ContentType::Podcast,
            &["Crime", "Documentary"],
            Some("1h 10m"),
            Some(4.8),
            None,
            false,
        ),
        record(
            9,
            "newsroom-24",
            "Newsroom 24",
            "Rolling news, around the clock.",
            ContentType::Live,
            &["News"],
            None,
            None,
            None,
            false,
        ),
    ]
}
