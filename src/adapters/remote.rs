//! Remote record store over a PostgREST-style HTTP API.
//!
//! The hosted backend exposes the `content` table under `/rest/v1`, with
//! query-string filters and ordering. The client holds a single reqwest
//! Client and the project credentials.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{ContentId, ContentRecord, NewRecord};

use super::{RecordStore, StoreError};

/// Configuration for the remote record store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Project base URL, e.g. `https://project.example.co`
    pub base_url: String,
    /// Project API key, sent as both `apikey` and bearer token
    pub api_key: String,
}

/// PostgREST client for the content table
pub struct RemoteStore {
    config: RemoteConfig,
    client: reqwest::Client,
}

impl RemoteStore {
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Build the content-table URL with the given query string.
    fn content_url(&self, query: &str) -> String {
        format!(
            "{}/rest/v1/content?{}",
            self.config.base_url.trim_end_matches('/'),
            query
        )
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
    }

    /// GET a list of rows, mapping transport and status errors to a
    /// fetch failure with a human-readable message.
    async fn fetch_rows(&self, query: &str) -> Result<Vec<ContentRecord>, StoreError> {
        let url = self.content_url(query);

        let response = self
            .authorized(self.client.get(&url))
            .send()
            .await
            .map_err(|e| StoreError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Fetch(format!(
                "backend returned {}: {}",
                status,
                body.trim()
            )));
        }

        response
            .json::<Vec<ContentRecord>>()
            .await
            .map_err(|e| StoreError::Fetch(format!("invalid content rows: {}", e)))
    }
}

#[async_trait]
impl RecordStore for RemoteStore {
    fn name(&self) -> &str {
        "remote"
    }

    async fn fetch_all(&self) -> Result<Vec<ContentRecord>, StoreError> {
        self.fetch_rows("select=*&order=created_at.desc").await
    }

    async fn fetch_featured(&self) -> Result<Vec<ContentRecord>, StoreError> {
        self.fetch_rows("select=*&featured=eq.true&order=created_at.desc")
            .await
    }

    async fn fetch_by_id(&self, id: &ContentId) -> Result<Option<ContentRecord>, StoreError> {
        let query = format!("select=*&id=eq.{}&limit=1", id);
        let rows = self.fetch_rows(&query).await?;
        Ok(rows.into_iter().next())
    }

    async fn persist_new(&self, record: NewRecord) -> Result<(), StoreError> {
        let url = self.content_url("select=id");

        let response = self
            .authorized(self.client.post(&url))
            .json(&record)
            .send()
            .await
            .map_err(|e| StoreError::Persist(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Persist(format!(
                "backend returned {}: {}",
                status,
                body.trim()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> RemoteStore {
        RemoteStore::new(RemoteConfig {
            base_url: "https://project.example.co/".to_string(),
            api_key: "anon-key".to_string(),
        })
    }

    #[test]
    fn test_content_url_trims_trailing_slash() {
        let url = store().content_url("select=*&order=created_at.desc");
        assert_eq!(
            url,
            "https://project.example.co/rest/v1/content?select=*&order=created_at.desc"
        );
    }

    #[test]
    fn test_new_record_wire_shape() {
        use crate::domain::{ContentType, UserId};

        let record = NewRecord {
            title: "Night Drive".to_string(),
            description: "A courier's last run.".to_string(),
            content_type: ContentType::Movie,
            genre: vec!["Thriller".to_string()],
            thumbnail: "https://images.example/nd.jpg".to_string(),
            video_url: "https://media.example/nd.mp4".to_string(),
            duration: None,
            rating: None,
            year: None,
            language: vec!["English".to_string()],
            featured: false,
            uploaded_by: UserId::new("user-1"),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "movie");
        assert_eq!(json["featured"], false);
        assert_eq!(json["uploaded_by"], "user-1");
    }
}
