//! Session-local console state.
//!
//! Everything here lives only as long as the process: command history, the
//! recall cursor, the input buffer, the navigation back stack, and the
//! transcript. Durable state (theme, active timer) goes through the state
//! repository instead.

use crate::transcript::TranscriptEntry;
use neondeck_core::nav::View;

/// Mutable session state owned by the console.
///
/// Command history is distinct from the transcript: history holds raw input
/// strings for recall navigation, the transcript holds rendered outcomes.
#[derive(Debug)]
pub struct ConsoleSession {
    history: Vec<String>,
    /// Recall cursor into `history`; -1 means "not browsing".
    cursor: isize,
    input: String,
    transcript: Vec<TranscriptEntry>,
    nav_stack: Vec<View>,
}

impl Default for ConsoleSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSession {
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            cursor: -1,
            input: String::new(),
            transcript: Vec::new(),
            nav_stack: Vec::new(),
        }
    }

    // ---- history & recall ----

    /// Records a non-empty submission: appends to history and leaves recall.
    ///
    /// Called for every non-empty line regardless of how the command turns
    /// out; empty input never reaches this.
    pub fn record_submission(&mut self, raw: &str) {
        self.history.push(raw.to_string());
        self.cursor = -1;
        self.input.clear();
    }

    /// Steps the recall cursor toward older entries, updating the input.
    ///
    /// From rest (-1) the cursor lands on the newest entry; further steps
    /// decrement, floored at the oldest. No-op on empty history.
    pub fn recall_previous(&mut self) {
        if self.history.is_empty() {
            return;
        }
        if self.cursor == -1 {
            self.cursor = self.history.len() as isize - 1;
        } else if self.cursor > 0 {
            self.cursor -= 1;
        }
        self.input = self.history[self.cursor as usize].clone();
    }

    /// Steps the recall cursor toward newer entries, updating the input.
    ///
    /// Stepping past the newest entry returns the cursor to rest and clears
    /// the input. No-op when not browsing.
    pub fn recall_next(&mut self) {
        if self.cursor == -1 {
            return;
        }
        self.cursor += 1;
        if self.cursor as usize >= self.history.len() {
            self.cursor = -1;
            self.input.clear();
        } else {
            self.input = self.history[self.cursor as usize].clone();
        }
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// The most recent `limit` history entries with their 1-based absolute
    /// positions, oldest of the window first.
    pub fn recent_history(&self, limit: usize) -> Vec<(usize, &str)> {
        let start = self.history.len().saturating_sub(limit);
        self.history[start..]
            .iter()
            .enumerate()
            .map(|(offset, raw)| (start + offset + 1, raw.as_str()))
            .collect()
    }

    // ---- input buffer ----

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the input buffer directly.
    ///
    /// Editing while browsing deliberately does not move the recall cursor;
    /// only a new submission resets it.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    // ---- transcript ----

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn append(&mut self, entry: TranscriptEntry) {
        self.transcript.push(entry);
    }

    /// Empties the transcript and the input buffer. History is untouched.
    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
        self.input.clear();
    }

    // ---- navigation back stack ----

    pub fn push_view(&mut self, view: View) {
        self.nav_stack.push(view);
    }

    pub fn pop_view(&mut self) -> Option<View> {
        self.nav_stack.pop()
    }

    #[cfg(test)]
    pub(crate) fn cursor(&self) -> isize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> ConsoleSession {
        let mut session = ConsoleSession::new();
        for raw in ["todo.list", "time.status", "help"] {
            session.record_submission(raw);
        }
        session
    }

    #[test]
    fn test_recall_previous_walks_backward() {
        let mut session = seeded();
        session.recall_previous();
        assert_eq!(session.input(), "help");
        session.recall_previous();
        assert_eq!(session.input(), "time.status");
        session.recall_previous();
        assert_eq!(session.input(), "todo.list");
        // floored at the oldest entry
        session.recall_previous();
        assert_eq!(session.input(), "todo.list");
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn test_recall_next_returns_to_rest() {
        let mut session = seeded();
        session.recall_previous();
        session.recall_previous();
        assert_eq!(session.input(), "time.status");
        session.recall_next();
        assert_eq!(session.input(), "help");
        session.recall_next();
        assert_eq!(session.input(), "");
        assert_eq!(session.cursor(), -1);
    }

    #[test]
    fn test_recall_next_at_rest_is_noop() {
        let mut session = seeded();
        session.recall_next();
        assert_eq!(session.input(), "");
        assert_eq!(session.cursor(), -1);
    }

    #[test]
    fn test_recall_on_empty_history_is_noop() {
        let mut session = ConsoleSession::new();
        session.recall_previous();
        assert_eq!(session.input(), "");
        assert_eq!(session.cursor(), -1);
    }

    #[test]
    fn test_round_trip_recall_matches_submission_order() {
        let mut session = seeded();
        let n = session.history().len();
        let mut seen = Vec::new();
        for _ in 0..n {
            session.recall_previous();
            seen.push(session.input().to_string());
        }
        assert_eq!(seen, vec!["help", "time.status", "todo.list"]);
        for _ in 0..n {
            session.recall_next();
        }
        assert_eq!(session.input(), "");
        assert_eq!(session.cursor(), -1);
    }

    #[test]
    fn test_editing_input_keeps_cursor() {
        let mut session = seeded();
        session.recall_previous();
        let before = session.cursor();
        session.set_input("help --verbose");
        assert_eq!(session.cursor(), before);
    }

    #[test]
    fn test_submission_resets_cursor() {
        let mut session = seeded();
        session.recall_previous();
        session.record_submission("clear");
        assert_eq!(session.cursor(), -1);
        assert_eq!(session.history().last().map(String::as_str), Some("clear"));
    }

    #[test]
    fn test_recent_history_window_and_numbering() {
        let mut session = ConsoleSession::new();
        for i in 1..=12 {
            session.record_submission(&format!("cmd{i}"));
        }
        let recent = session.recent_history(10);
        assert_eq!(recent.len(), 10);
        assert_eq!(recent.first().copied(), Some((3, "cmd3")));
        assert_eq!(recent.last().copied(), Some((12, "cmd12")));
    }

    #[test]
    fn test_clear_transcript_keeps_history() {
        let mut session = seeded();
        session.append(TranscriptEntry::error("x", "ERROR: nope"));
        session.clear_transcript();
        assert!(session.transcript().is_empty());
        assert_eq!(session.history().len(), 3);
    }

    #[test]
    fn test_nav_stack_order() {
        let mut session = ConsoleSession::new();
        session.push_view(View::Dashboard);
        session.push_view(View::Todos);
        assert_eq!(session.pop_view(), Some(View::Todos));
        assert_eq!(session.pop_view(), Some(View::Dashboard));
        assert_eq!(session.pop_view(), None);
    }
}
