//! Creation Workflow Integration Tests
//!
//! Validation ordering (no backend call on invalid input), submitted
//! record defaults, and persist-failure mapping.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use reelcast::{
    publish_content, CatalogStore, ContentDraft, ContentId, ContentRecord, ContentType,
    FixtureStore, NewRecord, PublishError, RecordStore, StoreError, UserId,
};

/// Backend that records every persisted record and can be told to reject.
#[derive(Default)]
struct RecordingStore {
    persisted: Mutex<Vec<NewRecord>>,
    persist_calls: AtomicUsize,
    reject_with: Option<String>,
}

impl RecordingStore {
    fn rejecting(message: &str) -> Self {
        Self {
            reject_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    fn persist_calls(&self) -> usize {
        self.persist_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordStore for RecordingStore {
    fn name(&self) -> &str {
        "recording"
    }

    async fn fetch_all(&self) -> Result<Vec<ContentRecord>, StoreError> {
        Ok(Vec::new())
    }

    async fn fetch_featured(&self) -> Result<Vec<ContentRecord>, StoreError> {
        Ok(Vec::new())
    }

    async fn fetch_by_id(&self, _id: &ContentId) -> Result<Option<ContentRecord>, StoreError> {
        Ok(None)
    }

    async fn persist_new(&self, record: NewRecord) -> Result<(), StoreError> {
        self.persist_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.reject_with {
            return Err(StoreError::Persist(message.clone()));
        }
        self.persisted.lock().unwrap().push(record);
        Ok(())
    }
}

fn valid_draft() -> ContentDraft {
    ContentDraft {
        title: "Night Drive".to_string(),
        description: "A courier's last run.".to_string(),
        content_type: Some(ContentType::Movie),
        genre: vec!["Thriller".to_string()],
        video_url: Some("https://media.example/nd.mp4".to_string()),
        thumbnail_url: Some("https://images.example/nd.jpg".to_string()),
        ..ContentDraft::default()
    }
}

fn creator() -> UserId {
    UserId::new("user-1")
}

#[tokio::test]
async fn test_empty_genre_fails_before_any_backend_call() {
    let backend = RecordingStore::default();
    let draft = ContentDraft {
        genre: Vec::new(),
        ..valid_draft()
    };

    let result = publish_content(&backend, draft, &creator()).await;

    assert_eq!(result, Err(PublishError::MissingField("genre")));
    assert_eq!(backend.persist_calls(), 0);
}

#[tokio::test]
async fn test_every_required_field_is_enforced() {
    let cases: Vec<(ContentDraft, &str)> = vec![
        (
            ContentDraft {
                title: String::new(),
                ..valid_draft()
            },
            "title",
        ),
        (
            ContentDraft {
                description: String::new(),
                ..valid_draft()
            },
            "description",
        ),
        (
            ContentDraft {
                content_type: None,
                ..valid_draft()
            },
            "type",
        ),
        (
            ContentDraft {
                video_url: None,
                ..valid_draft()
            },
            "video_url",
        ),
        (
            ContentDraft {
                thumbnail_url: None,
                ..valid_draft()
            },
            "thumbnail",
        ),
    ];

    for (draft, field) in cases {
        let backend = RecordingStore::default();
        let result = publish_content(&backend, draft, &creator()).await;
        assert_eq!(result, Err(PublishError::MissingField(field)));
        assert_eq!(backend.persist_calls(), 0);
    }
}

#[tokio::test]
async fn test_submitted_record_defaults() {
    let backend = RecordingStore::default();

    publish_content(&backend, valid_draft(), &creator())
        .await
        .unwrap();

    let persisted = backend.persisted.lock().unwrap();
    let record = &persisted[0];

    // Never auto-featured; language defaults to English; creator recorded
    assert!(!record.featured);
    assert_eq!(record.language, vec!["English".to_string()]);
    assert_eq!(record.uploaded_by, creator());
}

#[tokio::test]
async fn test_caller_supplied_language_is_kept() {
    let backend = RecordingStore::default();
    let draft = ContentDraft {
        language: vec!["French".to_string(), "English".to_string()],
        ..valid_draft()
    };

    publish_content(&backend, draft, &creator()).await.unwrap();

    let persisted = backend.persisted.lock().unwrap();
    assert_eq!(
        persisted[0].language,
        vec!["French".to_string(), "English".to_string()]
    );
}

#[tokio::test]
async fn test_persist_rejection_maps_to_publish_error() {
    let backend = RecordingStore::rejecting("row level security");

    let result = publish_content(&backend, valid_draft(), &creator()).await;

    assert_eq!(
        result,
        Err(PublishError::Persist("row level security".to_string()))
    );
}

#[tokio::test]
async fn test_created_record_appears_on_next_refresh_only() {
    let backend = FixtureStore::new();

    publish_content(&backend, valid_draft(), &creator())
        .await
        .unwrap();

    // The store never inserts optimistically; the record shows up after
    // an explicit refresh.
    let store = CatalogStore::new(backend);
    assert!(store.snapshot().all.is_empty());

    let snapshot = store.refresh().await;
    assert_eq!(snapshot.all.len(), 1);
    assert_eq!(snapshot.all[0].title, "Night Drive");
    assert!(!snapshot.all[0].featured);
}
