use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// A fully assembled inference request: system instruction plus user prompt.
#[derive(Debug, Clone)]
pub struct AssembledPrompt {
    pub system: String,
    pub user: String,
}

const NOTES_FALLBACK: &str =
    "None provided -- use your best judgment based on the infrastructure context.";

/// Load the system instruction verbatim from the prompt file.
pub fn load_system_prompt(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read system prompt {}", path.display()))
}

/// Compose the user prompt for a topic. Notes are passed through verbatim;
/// an empty media context contributes nothing.
pub fn assemble(system: String, topic: &str, notes: &str, media_context: &str) -> AssembledPrompt {
    let notes = if notes.trim().is_empty() {
        NOTES_FALLBACK
    } else {
        notes
    };

    let mut user = format!(
        "Write a comprehensive blog article about: {topic}\n\n\
         Additional context and key points to cover:\n{notes}\n"
    );
    if !media_context.is_empty() {
        user.push('\n');
        user.push_str(media_context);
    }
    user.push_str(
        "\nOutput the article as a complete Hugo page bundle index.md file with YAML front matter.\n\
         Do not wrap the output in markdown code fences -- output the raw file content directly.",
    );

    AssembledPrompt { system, user }
}
