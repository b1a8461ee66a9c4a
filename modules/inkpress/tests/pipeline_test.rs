use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;

use inkpress::backlog::TopicBacklog;
use inkpress::enrichment::{ImageSearcher, NoopImageSearcher};
use inkpress::generator::ArticleGenerator;
use inkpress::pipeline::{Pipeline, RunOutcome};
use inkpress::prompt::AssembledPrompt;
use mediabank_client::MediaItem;

const ARTICLE: &str = "---\ntitle: Test Article\n---\n\nA short body of exactly ten words for the count check.";

#[derive(Clone, Default)]
struct CannedGenerator {
    prompts: Arc<Mutex<Vec<AssembledPrompt>>>,
}

#[async_trait]
impl ArticleGenerator for CannedGenerator {
    async fn generate(&self, prompt: &AssembledPrompt) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.clone());
        Ok(ARTICLE.to_string())
    }
}

struct FailingSearcher;

#[async_trait]
impl ImageSearcher for FailingSearcher {
    async fn search_images(&self, _tags: &[String], _limit: usize) -> Result<Vec<MediaItem>> {
        anyhow::bail!("simulated search timeout")
    }
}

fn write_system_prompt(dir: &Path) -> PathBuf {
    let path = dir.join("article-system.txt");
    fs::write(&path, "You write infrastructure articles.").unwrap();
    path
}

fn pipeline(
    backlog_path: &Path,
    searcher: Box<dyn ImageSearcher>,
    generator: CannedGenerator,
    work_dir: &Path,
) -> Pipeline {
    Pipeline::new(
        TopicBacklog::new(backlog_path),
        searcher,
        Box::new(generator),
        write_system_prompt(work_dir),
        work_dir.join("posts"),
    )
}

#[tokio::test]
async fn explicit_topic_produces_bundle_without_touching_backlog() {
    let dir = tempfile::tempdir().unwrap();
    // A nonexistent backlog path proves the file is never read.
    let generator = CannedGenerator::default();
    let pipeline = pipeline(
        &dir.path().join("missing-topics.json"),
        Box::new(NoopImageSearcher),
        generator.clone(),
        dir.path(),
    );

    let outcome = pipeline
        .run("Self-Hosted CI/CD with Kubernetes", "")
        .await
        .unwrap();

    let RunOutcome::Published {
        path, word_count, ..
    } = outcome
    else {
        panic!("expected a published article");
    };

    let expected_dir = format!(
        "{}-self-hosted-ci-cd-with-kubernetes",
        Utc::now().format("%Y-%m")
    );
    assert!(path.ends_with(format!("{expected_dir}/index.md")), "got {path:?}");
    assert_eq!(fs::read_to_string(&path).unwrap(), ARTICLE);
    assert_eq!(word_count, ARTICLE.split_whitespace().count());
}

#[tokio::test]
async fn empty_backlog_is_a_noop() {
    let dir = tempfile::tempdir().unwrap();
    let backlog_path = dir.path().join("topics.json");
    fs::write(
        &backlog_path,
        r#"[{"topic": "Already Done", "generated": "2026-01-01T00:00:00Z"}]"#,
    )
    .unwrap();
    let before = fs::read_to_string(&backlog_path).unwrap();

    let generator = CannedGenerator::default();
    let pipeline = pipeline(
        &backlog_path,
        Box::new(NoopImageSearcher),
        generator.clone(),
        dir.path(),
    );

    let outcome = pipeline.run("", "").await.unwrap();
    assert!(matches!(outcome, RunOutcome::Idle));
    assert_eq!(fs::read_to_string(&backlog_path).unwrap(), before);
    assert!(generator.prompts.lock().unwrap().is_empty());
    assert!(!dir.path().join("posts").exists());
}

#[tokio::test]
async fn search_failure_still_yields_a_full_article_request() {
    let dir = tempfile::tempdir().unwrap();
    let generator = CannedGenerator::default();
    let pipeline = pipeline(
        &dir.path().join("missing-topics.json"),
        Box::new(FailingSearcher),
        generator.clone(),
        dir.path(),
    );

    let outcome = pipeline.run("GitOps with ArgoCD", "").await.unwrap();
    assert!(matches!(outcome, RunOutcome::Published { .. }));

    let prompts = generator.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].user.contains("GitOps with ArgoCD"));
    assert!(!prompts[0].user.contains("media library"));
    assert_eq!(prompts[0].system, "You write infrastructure articles.");
}

#[tokio::test]
async fn scheduled_topic_is_claimed_and_published() {
    let dir = tempfile::tempdir().unwrap();
    let backlog_path = dir.path().join("topics.json");
    fs::write(
        &backlog_path,
        r#"[{"topic": "Proxmox Cluster Setup", "notes": "cover HA and fencing"}]"#,
    )
    .unwrap();

    let generator = CannedGenerator::default();
    let pipeline = pipeline(
        &backlog_path,
        Box::new(NoopImageSearcher),
        generator.clone(),
        dir.path(),
    );

    let outcome = pipeline.run("", "").await.unwrap();
    let RunOutcome::Published { topic, path, .. } = outcome else {
        panic!("expected a published article");
    };
    assert_eq!(topic, "Proxmox Cluster Setup");
    assert!(path.exists());

    // The entry is now claimed.
    let raw = fs::read_to_string(&backlog_path).unwrap();
    assert!(raw.contains("generated"));
    let prompts = generator.prompts.lock().unwrap();
    assert!(prompts[0].user.contains("cover HA and fencing"));
}
