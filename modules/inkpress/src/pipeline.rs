use std::fmt;
use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::backlog::TopicBacklog;
use crate::bundle;
use crate::enrichment::{self, ImageSearcher};
use crate::generator::ArticleGenerator;
use crate::prompt;

/// Outcome of one pipeline run.
#[derive(Debug)]
pub enum RunOutcome {
    /// Backlog empty and no explicit topic; nothing was generated.
    Idle,
    Published {
        topic: String,
        path: PathBuf,
        word_count: usize,
    },
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::Idle => {
                writeln!(f, "No pending topics in backlog. Nothing to generate.")
            }
            RunOutcome::Published {
                topic,
                path,
                word_count,
            } => {
                writeln!(f, "\n=== Article Generated ===")?;
                writeln!(f, "Topic:      {topic}")?;
                writeln!(f, "Bundle:     {}", path.display())?;
                writeln!(f, "Word count: ~{word_count}")
            }
        }
    }
}

/// The generation pipeline: resolve topic, enrich, assemble, invoke, persist.
/// Strictly linear, one article per run.
pub struct Pipeline {
    backlog: TopicBacklog,
    searcher: Box<dyn ImageSearcher>,
    generator: Box<dyn ArticleGenerator>,
    system_prompt_path: PathBuf,
    content_dir: PathBuf,
}

impl Pipeline {
    pub fn new(
        backlog: TopicBacklog,
        searcher: Box<dyn ImageSearcher>,
        generator: Box<dyn ArticleGenerator>,
        system_prompt_path: PathBuf,
        content_dir: PathBuf,
    ) -> Self {
        Self {
            backlog,
            searcher,
            generator,
            system_prompt_path,
            content_dir,
        }
    }

    /// Run one generation cycle.
    pub async fn run(&self, explicit_topic: &str, explicit_notes: &str) -> Result<RunOutcome> {
        let Some((topic, notes)) = self.backlog.resolve_topic(explicit_topic, explicit_notes)?
        else {
            info!("No pending topics in backlog");
            return Ok(RunOutcome::Idle);
        };

        info!(topic = topic.as_str(), "Generating article");

        let media_context = enrichment::enrich(self.searcher.as_ref(), &topic).await;

        let system = prompt::load_system_prompt(&self.system_prompt_path)?;
        let assembled = prompt::assemble(system, &topic, &notes, &media_context);

        let article = self.generator.generate(&assembled).await?;

        let path = bundle::persist(&self.content_dir, &topic, &article)?;
        let word_count = article.split_whitespace().count();

        Ok(RunOutcome::Published {
            topic,
            path,
            word_count,
        })
    }
}
