use serde::{Deserialize, Serialize};

/// Search input for the media library API.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub tags: Vec<String>,
    #[serde(rename = "type")]
    pub media_type: String,
    pub limit: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<MediaItem>,
}

/// One candidate image from the media library.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaItem {
    pub cdn_url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub ai_description: Option<String>,
    #[serde(default)]
    pub user_tags: Vec<String>,
}

impl MediaItem {
    /// Human-readable label: alt text when present, filename as fallback.
    pub fn label(&self) -> &str {
        self.alt_text
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.filename.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or("")
    }
}
