use anyhow::{anyhow, Result};
use async_trait::async_trait;
use claude_client::{ClaudeClient, Message, MessageRequest};
use tracing::info;

use crate::prompt::AssembledPrompt;

/// Model used for article generation.
const MODEL_ID: &str = "claude-3-5-sonnet-20241022";
/// Articles run long; leave generous output headroom.
const MAX_TOKENS: u32 = 8192;
const TEMPERATURE: f32 = 0.7;

#[async_trait]
pub trait ArticleGenerator: Send + Sync {
    async fn generate(&self, prompt: &AssembledPrompt) -> Result<String>;
}

/// Claude-backed article generator. Failures are hard errors; the pipeline
/// does not retry or degrade here.
pub struct ClaudeGenerator {
    client: ClaudeClient,
}

impl ClaudeGenerator {
    pub fn new(api_key: &str) -> Self {
        Self {
            client: ClaudeClient::new(api_key),
        }
    }
}

#[async_trait]
impl ArticleGenerator for ClaudeGenerator {
    async fn generate(&self, prompt: &AssembledPrompt) -> Result<String> {
        info!(model = MODEL_ID, "Requesting article generation");

        let request = MessageRequest::new(MODEL_ID)
            .system(prompt.system.clone())
            .message(Message::user(prompt.user.clone()))
            .max_tokens(MAX_TOKENS)
            .temperature(TEMPERATURE);

        let response = self.client.send(&request).await?;
        response
            .text()
            .map(str::to_string)
            .ok_or_else(|| anyhow!("No text content in model response"))
    }
}
