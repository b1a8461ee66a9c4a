use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use inkpress::config::UploadConfig;
use inkpress::uploader::{self, S3MediaStore, DEFAULT_PREFIX};

/// Upload media files to the blog's object storage.
#[derive(Parser, Debug)]
#[command(name = "upload-media", about = "Upload media files to S3")]
struct Args {
    /// Files to upload.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// S3 key prefix.
    #[arg(long, default_value = DEFAULT_PREFIX)]
    prefix: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("inkpress=info".parse()?))
        .init();

    let args = Args::parse();
    let config = UploadConfig::from_env();
    let store = S3MediaStore::from_env(config.bucket.clone()).await;

    let report = uploader::upload_batch(&store, &args.files, &args.prefix).await?;

    for key in &report.uploaded {
        println!("Uploaded: s3://{}/{}", config.bucket, key);
    }
    for path in &report.skipped {
        println!("Skipped (not found): {}", path.display());
    }

    Ok(())
}
