use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

/// One candidate topic awaiting generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicEntry {
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// RFC 3339 claim timestamp. `None` means the entry is still pending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated: Option<String>,
}

/// Ordered topic backlog stored as a JSON file.
///
/// Claiming is a whole-file read-modify-write with no locking: two
/// concurrent invocations can claim the same entry. Callers that need
/// exactly-once generation must serialize invocations externally.
pub struct TopicBacklog {
    path: PathBuf,
}

impl TopicBacklog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the topic to write about.
    ///
    /// An explicit non-empty topic wins and leaves the backlog untouched.
    /// Otherwise the first pending entry is claimed and the file rewritten.
    /// Returns `None` when there is nothing to do.
    pub fn resolve_topic(
        &self,
        explicit_topic: &str,
        explicit_notes: &str,
    ) -> Result<Option<(String, String)>> {
        let topic = explicit_topic.trim();
        if !topic.is_empty() {
            return Ok(Some((topic.to_string(), explicit_notes.trim().to_string())));
        }
        self.claim_next()
    }

    fn claim_next(&self) -> Result<Option<(String, String)>> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read backlog {}", self.path.display()))?;
        let mut entries: Vec<TopicEntry> =
            serde_json::from_str(&raw).context("Failed to parse backlog")?;

        let Some(entry) = entries.iter_mut().find(|e| e.generated.is_none()) else {
            return Ok(None);
        };
        entry.generated = Some(Utc::now().to_rfc3339());
        let topic = entry.topic.clone();
        let notes = entry.notes.clone().unwrap_or_default();
        info!(topic = topic.as_str(), "Claimed scheduled topic");

        let json =
            serde_json::to_string_pretty(&entries).context("Failed to serialize backlog")?;
        fs::write(&self.path, json + "\n")
            .with_context(|| format!("Failed to write backlog {}", self.path.display()))?;

        Ok(Some((topic, notes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_backlog(dir: &tempfile::TempDir, entries: &[TopicEntry]) -> PathBuf {
        let path = dir.path().join("topics.json");
        fs::write(&path, serde_json::to_string_pretty(entries).unwrap()).unwrap();
        path
    }

    fn entry(topic: &str, notes: Option<&str>, generated: Option<&str>) -> TopicEntry {
        TopicEntry {
            topic: topic.to_string(),
            notes: notes.map(str::to_string),
            generated: generated.map(str::to_string),
        }
    }

    #[test]
    fn explicit_topic_bypasses_the_file() {
        // Nonexistent path proves the backlog is never read.
        let backlog = TopicBacklog::new("/nonexistent/topics.json");
        let resolved = backlog
            .resolve_topic("Bare-Metal Kubernetes", "focus on networking")
            .unwrap();
        assert_eq!(
            resolved,
            Some((
                "Bare-Metal Kubernetes".to_string(),
                "focus on networking".to_string()
            ))
        );
    }

    #[test]
    fn claims_first_pending_entry_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_backlog(
            &dir,
            &[
                entry("Done Topic", None, Some("2026-01-01T00:00:00Z")),
                entry("Next Up", Some("cover the basics"), None),
                entry("Later", None, None),
            ],
        );

        let backlog = TopicBacklog::new(&path);
        let resolved = backlog.resolve_topic("", "").unwrap();
        assert_eq!(
            resolved,
            Some(("Next Up".to_string(), "cover the basics".to_string()))
        );

        let entries: Vec<TopicEntry> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(entries[1].generated.is_some());
        assert!(entries[2].generated.is_none());
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn second_claim_takes_the_next_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_backlog(&dir, &[entry("First", None, None), entry("Second", None, None)]);

        let backlog = TopicBacklog::new(&path);
        assert_eq!(backlog.resolve_topic("", "").unwrap().unwrap().0, "First");
        assert_eq!(backlog.resolve_topic("", "").unwrap().unwrap().0, "Second");
        assert_eq!(backlog.resolve_topic("", "").unwrap(), None);
    }

    #[test]
    fn empty_backlog_is_a_noop_and_file_is_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_backlog(&dir, &[entry("Done", None, Some("2026-01-01T00:00:00Z"))]);
        let before = fs::read_to_string(&path).unwrap();

        let backlog = TopicBacklog::new(&path);
        assert_eq!(backlog.resolve_topic("", "").unwrap(), None);

        let after = fs::read_to_string(&path).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn missing_notes_resolve_to_empty_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_backlog(&dir, &[entry("No Notes", None, None)]);

        let backlog = TopicBacklog::new(&path);
        let (_, notes) = backlog.resolve_topic("", "").unwrap().unwrap();
        assert_eq!(notes, "");
    }
}
