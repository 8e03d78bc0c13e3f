//! Note domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A free-form note with optional tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Opaque identifier assigned by the repository.
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// The shortened identifier shown in console listings.
    pub fn short_id(&self) -> &str {
        let end = self.id.len().min(8);
        &self.id[..end]
    }

    /// Case-insensitive substring match against title or content.
    pub fn matches(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.content.to_lowercase().contains(&needle)
    }
}

/// Fields needed to create a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(title: &str, content: &str) -> Note {
        Note {
            id: "n1".to_string(),
            title: title.to_string(),
            content: content.to_string(),
            tags: vec![],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_matches_title_case_insensitive() {
        assert!(note("Release Checklist", "ship it").matches("release"));
        assert!(note("Release Checklist", "ship it").matches("CHECKLIST"));
    }

    #[test]
    fn test_matches_content() {
        assert!(note("misc", "remember the deploy key").matches("Deploy"));
        assert!(!note("misc", "remember the deploy key").matches("rollback"));
    }
}
