use anyhow::Result;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use inkpress::backlog::TopicBacklog;
use inkpress::config::Config;
use inkpress::enrichment::{ImageSearcher, NoopImageSearcher};
use inkpress::generator::ClaudeGenerator;
use inkpress::pipeline::Pipeline;
use mediabank_client::MediabankClient;

/// Generate one blog article page bundle.
#[derive(Parser, Debug)]
#[command(name = "inkpress", about = "Generate blog article page bundles")]
struct Args {
    /// Explicit topic; skips the backlog when set.
    #[arg(long, env = "TOPIC", default_value = "")]
    topic: String,

    /// Additional context and key points to cover.
    #[arg(long, env = "NOTES", default_value = "")]
    notes: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("inkpress=info".parse()?))
        .init();

    let args = Args::parse();
    let config = Config::from_env();

    let searcher: Box<dyn ImageSearcher> =
        match (&config.mediabank_url, &config.mediabank_api_key) {
            (Some(url), Some(key)) => Box::new(MediabankClient::new(url, key)),
            _ => {
                warn!("MEDIABANK_URL/MEDIABANK_API_KEY not set, skipping media enrichment");
                Box::new(NoopImageSearcher)
            }
        };

    let pipeline = Pipeline::new(
        TopicBacklog::new(&config.backlog_path),
        searcher,
        Box::new(ClaudeGenerator::new(&config.anthropic_api_key)),
        config.system_prompt_path.clone(),
        config.content_dir.clone(),
    );

    let outcome = pipeline.run(&args.topic, &args.notes).await?;
    print!("{outcome}");

    Ok(())
}
