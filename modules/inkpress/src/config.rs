use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,

    // Media library (optional; enrichment degrades to nothing without it)
    pub mediabank_url: Option<String>,
    pub mediabank_api_key: Option<String>,

    // Paths
    pub backlog_path: PathBuf,
    pub system_prompt_path: PathBuf,
    pub content_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if required vars are missing.
    pub fn from_env() -> Self {
        Self {
            anthropic_api_key: required_env("ANTHROPIC_API_KEY"),
            mediabank_url: optional_env("MEDIABANK_URL"),
            mediabank_api_key: optional_env("MEDIABANK_API_KEY"),
            backlog_path: path_env("BACKLOG_PATH", "prompts/topics.json"),
            system_prompt_path: path_env("SYSTEM_PROMPT_PATH", "prompts/article-system.txt"),
            content_dir: path_env("CONTENT_DIR", "hugo/content/posts"),
        }
    }
}

/// Configuration for the media upload binary.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub bucket: String,
}

impl UploadConfig {
    pub fn from_env() -> Self {
        Self {
            bucket: required_env("S3_BUCKET_NAME"),
        }
    }
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}

fn optional_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

fn path_env(key: &str, default: &str) -> PathBuf {
    env::var(key)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}
