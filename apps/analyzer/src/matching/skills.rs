//! Skill vocabulary loading and whole-word skill lookup.
//!
//! The vocabulary is an externally configurable JSON array of strings.
//! Absence or malformed content degrades silently to the built-in list;
//! loading never surfaces an error to the caller.

use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use crate::config::Config;

/// Built-in fallback vocabulary, used when the configured skills file is
/// absent or malformed.
const DEFAULT_SKILLS: &[&str] = &[
    "python",
    "java",
    "c++",
    "javascript",
    "flask",
    "django",
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "git",
    "linux",
    "html",
    "css",
    "pandas",
    "numpy",
    "scikit-learn",
    "tensorflow",
    "pytorch",
    "nlp",
    "opencv",
    "rest api",
    "api",
    "automation",
    "data analysis",
    "data visualization",
    "matplotlib",
    "plotly",
    "streamlit",
];

static CACHED: OnceCell<SkillVocabulary> = OnceCell::new();

/// An ordered, read-only list of lowercase skill keywords and phrases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillVocabulary {
    entries: Vec<String>,
}

impl SkillVocabulary {
    /// Loads the vocabulary from a JSON array of strings. Entries are
    /// trimmed and lowercased. Any failure falls back silently to the
    /// built-in list.
    pub fn load(path: &Path) -> Self {
        match read_entries(path) {
            Ok(entries) if !entries.is_empty() => {
                debug!(
                    count = entries.len(),
                    path = %path.display(),
                    "Loaded skill vocabulary"
                );
                SkillVocabulary { entries }
            }
            Ok(_) => {
                warn!(
                    path = %path.display(),
                    "Skill vocabulary file has no usable entries, using built-in list"
                );
                Self::built_in()
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to load skill vocabulary, using built-in list"
                );
                Self::built_in()
            }
        }
    }

    /// The built-in fallback vocabulary.
    pub fn built_in() -> Self {
        SkillVocabulary {
            entries: DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Process-wide vocabulary, loaded once from the configured path.
    /// Idempotent; the backing file is not re-read within a process.
    pub fn cached(config: &Config) -> &'static SkillVocabulary {
        CACHED.get_or_init(|| SkillVocabulary::load(&config.skills_path))
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn read_entries(path: &Path) -> Result<Vec<String>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading skill vocabulary from '{}'", path.display()))?;
    let skills: Vec<String> =
        serde_json::from_str(&raw).context("skill vocabulary must be a JSON array of strings")?;
    Ok(skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect())
}

/// Case-insensitive whole-word (whole-phrase, for multi-word entries)
/// skill lookup. Returns the sorted, deduplicated vocabulary entries
/// present in the text; repeated occurrences count once.
pub fn extract_skills(text: &str, vocabulary: &SkillVocabulary) -> Vec<String> {
    let text_lower = text.to_lowercase();
    let mut found: Vec<String> = vocabulary
        .entries()
        .iter()
        .filter(|skill| contains_whole_word(&text_lower, skill))
        .cloned()
        .collect();
    found.sort();
    found.dedup();
    found
}

/// Whole-word containment: each occurrence's neighbors must not be word
/// characters (`[0-9A-Za-z_]`), so "java" does not match inside
/// "javascript" while "c++" still matches before a space or line end.
fn contains_whole_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    let bytes = haystack.as_bytes();
    let mut start = 0;
    while let Some(pos) = haystack[start..].find(needle) {
        let begin = start + pos;
        let end = begin + needle.len();
        let before_ok = begin == 0 || !is_word_byte(bytes[begin - 1]);
        let after_ok = end == haystack.len() || !is_word_byte(bytes[end]);
        if before_ok && after_ok {
            return true;
        }
        // Advance by one character so overlapping occurrences are seen.
        let step = haystack[begin..].chars().next().map_or(1, char::len_utf8);
        start = begin + step;
    }
    false
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
