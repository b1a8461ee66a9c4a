use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use tracing::{info, warn};

/// Default key prefix for uploaded media.
pub const DEFAULT_PREFIX: &str = "media/photos";

/// Uploaded assets are immutable: a changed image gets a new filename.
const CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn put(
        &self,
        key: &str,
        content_type: &str,
        cache_control: &str,
        path: &Path,
    ) -> Result<()>;
}

/// S3-backed media store.
pub struct S3MediaStore {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3MediaStore {
    pub async fn from_env(bucket: String) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self {
            client: aws_sdk_s3::Client::new(&config),
            bucket,
        }
    }
}

#[async_trait]
impl MediaStore for S3MediaStore {
    async fn put(
        &self,
        key: &str,
        content_type: &str,
        cache_control: &str,
        path: &Path,
    ) -> Result<()> {
        let body = ByteStream::from_path(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .cache_control(cache_control)
            .body(body)
            .send()
            .await
            .with_context(|| format!("Failed to upload {}", path.display()))?;

        info!(bucket = self.bucket.as_str(), key, "Uploaded");
        Ok(())
    }
}

/// Result of one batch upload.
#[derive(Debug, Default)]
pub struct UploadReport {
    /// Object keys written, in input order.
    pub uploaded: Vec<String>,
    /// Input paths that did not exist.
    pub skipped: Vec<PathBuf>,
}

/// Upload each existing file under `<prefix>/<filename>`. Missing paths are
/// reported and skipped; they never abort the batch.
pub async fn upload_batch(
    store: &dyn MediaStore,
    files: &[PathBuf],
    prefix: &str,
) -> Result<UploadReport> {
    let mut report = UploadReport::default();

    for path in files {
        if !path.exists() {
            warn!(path = %path.display(), "Skipping (not found)");
            report.skipped.push(path.clone());
            continue;
        }

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("Invalid file name: {}", path.display()))?;
        let key = format!("{prefix}/{filename}");
        let content_type = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or("application/octet-stream");

        store.put(&key, content_type, CACHE_CONTROL, path).await?;
        report.uploaded.push(key);
    }

    Ok(report)
}
