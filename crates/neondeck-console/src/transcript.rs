//! Transcript entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Classification of a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Success,
    Error,
    Info,
}

/// One executed command and its rendered outcome.
///
/// Entries are append-only: once created they are never mutated, and the
/// transcript's order is submission order. The transcript grows unbounded in
/// memory; display windowing is the front end's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// The line as submitted, trimmed.
    pub raw_input: String,
    /// Rendered output, one string per displayed line.
    pub output_lines: Vec<String>,
    pub timestamp: DateTime<Utc>,
    pub kind: EntryKind,
}

impl TranscriptEntry {
    /// Creates an entry stamped with the current time.
    pub fn new(raw_input: impl Into<String>, kind: EntryKind, output_lines: Vec<String>) -> Self {
        Self {
            raw_input: raw_input.into(),
            output_lines,
            timestamp: Utc::now(),
            kind,
        }
    }

    /// Creates an error entry with a single output line.
    pub fn error(raw_input: impl Into<String>, line: impl Into<String>) -> Self {
        Self::new(raw_input, EntryKind::Error, vec![line.into()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_entry() {
        let entry = TranscriptEntry::error("todo.add", "ERROR: task description required");
        assert_eq!(entry.kind, EntryKind::Error);
        assert_eq!(entry.output_lines.len(), 1);
        assert_eq!(entry.raw_input, "todo.add");
    }
}
