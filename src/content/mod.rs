//! Learning content lookup
//!
//! Open Water learning material lives as one markdown file per topic
//! (`<dir>/<slug>.md`). The library hands back the raw text; rendering is
//! left to whoever displays it.

use crate::error::{DiveBuddyError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Link target of the learning index
pub const LEARN_ROUTE: &str = "/learn";

/// Link target of the chat page
pub const CHAT_PAGE_ROUTE: &str = "/chat";

fn slug_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("static slug regex"))
}

/// Returns true if `slug` can name a topic file
pub fn is_valid_slug(slug: &str) -> bool {
    slug_pattern().is_match(slug)
}

/// Difficulty badge shown next to a topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// First-dive material
    Beginner,
    /// Material that assumes Open Water certification
    Intermediate,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Beginner => write!(f, "Beginner"),
            Self::Intermediate => write!(f, "Intermediate"),
        }
    }
}

/// Catalog entry for a featured topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSummary {
    /// Slug, doubles as the file stem
    pub id: String,
    /// Display title
    pub title: String,
    /// Difficulty badge
    pub level: Level,
    /// Link to the topic page
    pub href: String,
}

impl TopicSummary {
    fn new(id: &str, title: &str, level: Level) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            level,
            href: format!("{}/{}", LEARN_ROUTE, id),
        }
    }
}

/// The featured Open Water / AOW topics
pub fn default_catalog() -> Vec<TopicSummary> {
    vec![
        TopicSummary::new("equipment", "Equipment Overview", Level::Beginner),
        TopicSummary::new("buoyancy", "Buoyancy Control", Level::Beginner),
        TopicSummary::new("navigation", "Underwater Navigation", Level::Intermediate),
    ]
}

/// File-backed topic store
#[derive(Debug, Clone)]
pub struct ContentLibrary {
    root: PathBuf,
}

impl ContentLibrary {
    /// Create a library rooted at `root`; the directory need not exist yet
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory the library reads from
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Slugs of all available topics, sorted
    ///
    /// A missing directory yields an empty list rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory exists but cannot be listed
    pub fn list_topics(&self) -> Result<Vec<String>> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(dir = %self.root.display(), "Content directory missing");
                return Ok(Vec::new());
            }
            Err(e) => return Err(DiveBuddyError::Io(e).into()),
        };

        let mut topics = Vec::new();
        for entry in entries {
            let path = entry.map_err(DiveBuddyError::Io)?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("md") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if is_valid_slug(stem) {
                    topics.push(stem.to_string());
                }
            }
        }
        topics.sort();
        Ok(topics)
    }

    /// Raw markdown for `slug`
    ///
    /// # Errors
    ///
    /// - `InvalidTopic` if the slug contains anything but `[A-Za-z0-9_-]`
    /// - `TopicNotFound` if no `<slug>.md` exists
    /// - `Content` if the file exists but cannot be read
    pub fn load(&self, slug: &str) -> Result<String> {
        if !is_valid_slug(slug) {
            return Err(DiveBuddyError::InvalidTopic(slug.to_string()).into());
        }

        let path = self.root.join(format!("{}.md", slug));
        if !path.is_file() {
            return Err(DiveBuddyError::TopicNotFound(slug.to_string()).into());
        }

        std::fs::read_to_string(&path).map_err(|e| {
            DiveBuddyError::Content(format!("Failed to read {}: {}", path.display(), e)).into()
        })
    }
}
