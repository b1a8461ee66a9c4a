use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;

/// File name of the article inside a page bundle.
const BUNDLE_FILE: &str = "index.md";

/// Normalize a topic into a URL-safe slug: every run of characters outside
/// [a-z0-9] becomes a single hyphen, with leading/trailing hyphens stripped.
pub fn slugify(topic: &str) -> String {
    let re = regex::Regex::new(r"[^a-z0-9]+").expect("valid regex");
    re.replace_all(&topic.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}

/// Write the article into a `<YYYY-MM>-<slug>` page bundle under
/// `content_dir`. Re-running with the same topic in the same month reuses
/// the directory and overwrites the article.
pub fn persist(content_dir: &Path, topic: &str, article: &str) -> Result<PathBuf> {
    let slug = slugify(topic);
    let prefix = Utc::now().format("%Y-%m");
    let bundle_dir = content_dir.join(format!("{prefix}-{slug}"));

    fs::create_dir_all(&bundle_dir)
        .with_context(|| format!("Failed to create bundle dir {}", bundle_dir.display()))?;

    let path = bundle_dir.join(BUNDLE_FILE);
    fs::write(&path, article)
        .with_context(|| format!("Failed to write article {}", path.display()))?;

    info!(path = %path.display(), "Article written");
    Ok(path)
}
