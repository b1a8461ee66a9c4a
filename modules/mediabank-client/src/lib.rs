pub mod error;
pub mod types;

pub use error::{MediabankError, Result};
pub use types::{MediaItem, SearchRequest, SearchResponse};

use std::time::Duration;

use tracing::debug;

/// Enrichment is optional context; the search must answer fast or not at all.
const SEARCH_TIMEOUT: Duration = Duration::from_secs(10);

pub struct MediabankClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl MediabankClient {
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(SEARCH_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// Search the media library for images matching the given tags.
    pub async fn search_images(&self, tags: &[String], limit: usize) -> Result<Vec<MediaItem>> {
        let request = SearchRequest {
            tags: tags.to_vec(),
            media_type: "image".to_string(),
            limit,
        };

        let url = format!("{}/api/search", self.base_url);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(MediabankError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let data: SearchResponse = resp.json().await?;
        debug!(count = data.items.len(), "Media search complete");
        Ok(data.items)
    }
}
