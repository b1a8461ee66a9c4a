use anyhow::Result;
use async_trait::async_trait;
use mediabank_client::{MediaItem, MediabankClient};
use tracing::warn;

/// Words too generic to be useful as search tags.
const STOP_WORDS: [&str; 14] = [
    "a", "an", "the", "and", "or", "for", "on", "in", "to", "with", "how", "why", "my", "i",
];

/// Max tags sent to the image search.
const MAX_TAGS: usize = 5;
/// Max images requested per search.
const MAX_RESULTS: usize = 5;
/// Max characters of AI description embedded per image.
const DESCRIPTION_LIMIT: usize = 100;

// --- ImageSearcher trait ---

#[async_trait]
pub trait ImageSearcher: Send + Sync {
    async fn search_images(&self, tags: &[String], limit: usize) -> Result<Vec<MediaItem>>;
}

#[async_trait]
impl ImageSearcher for MediabankClient {
    async fn search_images(&self, tags: &[String], limit: usize) -> Result<Vec<MediaItem>> {
        Ok(MediabankClient::search_images(self, tags, limit).await?)
    }
}

/// No-op searcher for when no media library is configured.
pub struct NoopImageSearcher;

#[async_trait]
impl ImageSearcher for NoopImageSearcher {
    async fn search_images(&self, _tags: &[String], _limit: usize) -> Result<Vec<MediaItem>> {
        Ok(Vec::new())
    }
}

// --- Tag extraction ---

/// Derive search tags from a topic: case-folded, punctuation stripped, stop
/// words and short tokens dropped, capped at five in original order.
pub fn extract_tags(topic: &str) -> Vec<String> {
    topic
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .collect::<String>()
        .split_whitespace()
        .filter(|t| !STOP_WORDS.contains(t))
        .filter(|t| t.len() > 2)
        .take(MAX_TAGS)
        .map(str::to_string)
        .collect()
}

// --- Enrichment ---

/// Build the media context block for a topic.
///
/// Search failures degrade to an empty block; enrichment never aborts the
/// pipeline.
pub async fn enrich(searcher: &dyn ImageSearcher, topic: &str) -> String {
    let tags = extract_tags(topic);
    let items = match searcher.search_images(&tags, MAX_RESULTS).await {
        Ok(items) => items,
        Err(e) => {
            warn!(topic, error = %e, "Image search failed, continuing without media context");
            Vec::new()
        }
    };
    format_context(&items)
}

/// Format search results into a prompt-embeddable block.
/// Zero results produce an empty string, not an empty header.
pub fn format_context(items: &[MediaItem]) -> String {
    if items.is_empty() {
        return String::new();
    }

    let mut block = String::from(
        "These images from the media library can be embedded in the article:\n",
    );
    for item in items {
        let description = truncate(
            item.ai_description.as_deref().unwrap_or(""),
            DESCRIPTION_LIMIT,
        );
        block.push_str(&format!("![{}]({})\n", item.label(), item.cdn_url));
        block.push_str(&format!(
            "  {} (tags: {})\n",
            description,
            item.user_tags.join(", ")
        ));
    }
    block.push_str(
        "Embed only the images that are genuinely relevant to the article -- not all of them.\n",
    );
    block
}

fn truncate(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
