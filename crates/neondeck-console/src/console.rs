//! The console dispatcher.
//!
//! `Console` owns the session state and the collaborator handles, and turns
//! raw input lines into transcript entries. Handlers live in [`crate::handlers`],
//! one module per command family; each is an isolated async fn that can be
//! unit-tested without going through the dispatcher.

use crate::args::{self, ParsedArgs};
use crate::handlers;
use crate::session::ConsoleSession;
use crate::transcript::{EntryKind, TranscriptEntry};
use neondeck_core::calendar::CalendarEventRepository;
use neondeck_core::error::DeckError;
use neondeck_core::nav::{NavigationService, View};
use neondeck_core::note::NoteRepository;
use neondeck_core::state::StateRepository;
use neondeck_core::task::TaskRepository;
use neondeck_core::theme::Theme;
use neondeck_core::timelog::TimeEntryRepository;
use std::sync::Arc;
use tokio::sync::Mutex;

/// What a handler hands back to the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Rendered output lines with their classification.
    Lines { kind: EntryKind, lines: Vec<String> },
    /// Terminal cases that append nothing (`clear`, `sys.reload`).
    Silent,
}

impl CommandOutput {
    pub fn success(lines: Vec<String>) -> Self {
        Self::Lines {
            kind: EntryKind::Success,
            lines,
        }
    }

    pub fn info(lines: Vec<String>) -> Self {
        Self::Lines {
            kind: EntryKind::Info,
            lines,
        }
    }
}

/// The command console: parser, dispatcher, and session state in one place.
///
/// Command execution is not serialized across submissions; each `execute`
/// call runs to completion on its own and appends its transcript entry
/// atomically. Overlapping commands may interleave their collaborator calls,
/// and timer/theme updates resolve last-write-wins.
pub struct Console {
    tasks: Arc<dyn TaskRepository>,
    time_entries: Arc<dyn TimeEntryRepository>,
    events: Arc<dyn CalendarEventRepository>,
    notes: Arc<dyn NoteRepository>,
    nav: Arc<dyn NavigationService>,
    state: Arc<dyn StateRepository>,
    session: Arc<Mutex<ConsoleSession>>,
}

impl Console {
    pub fn new(
        tasks: Arc<dyn TaskRepository>,
        time_entries: Arc<dyn TimeEntryRepository>,
        events: Arc<dyn CalendarEventRepository>,
        notes: Arc<dyn NoteRepository>,
        nav: Arc<dyn NavigationService>,
        state: Arc<dyn StateRepository>,
    ) -> Self {
        Self {
            tasks,
            time_entries,
            events,
            notes,
            nav,
            state,
            session: Arc::new(Mutex::new(ConsoleSession::new())),
        }
    }

    /// Executes one input line.
    ///
    /// Returns the transcript entry the line produced, or `None` for the
    /// defined no-op and terminal cases (blank input, `clear`, `sys.reload`).
    /// Every non-empty line is recorded in command history before dispatch,
    /// whatever its outcome. Handler failures never escape: they are
    /// converted into `error`-classified entries here.
    pub async fn execute(&self, raw: &str) -> Option<TranscriptEntry> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        self.session.lock().await.record_submission(trimmed);

        let tokens: Vec<String> = trimmed.split_whitespace().map(str::to_string).collect();
        let name = tokens[0].clone();
        let parsed = args::parse(&tokens[1..]);

        tracing::debug!(command = %name, "dispatching");
        let result = self.dispatch(&name, &tokens[1..], &parsed).await;

        let entry = match result {
            Ok(CommandOutput::Silent) => return None,
            Ok(CommandOutput::Lines { kind, lines }) => TranscriptEntry::new(trimmed, kind, lines),
            Err(err) => {
                tracing::debug!(command = %name, error = %err, "command failed");
                TranscriptEntry::error(trimmed, render_error(&err))
            }
        };

        self.session.lock().await.append(entry.clone());
        Some(entry)
    }

    async fn dispatch(
        &self,
        name: &str,
        raw_args: &[String],
        parsed: &ParsedArgs,
    ) -> neondeck_core::Result<CommandOutput> {
        if let Some(target) = name
            .strip_prefix("nav.")
            .or_else(|| name.strip_prefix("goto."))
        {
            if target == "back" {
                return handlers::nav::back(self.nav.as_ref(), &self.session).await;
            }
            return match View::parse(target) {
                Some(view) => handlers::nav::go(self.nav.as_ref(), &self.session, view).await,
                None => Err(DeckError::UnknownCommand(name.to_string())),
            };
        }

        match name {
            "todo.add" => handlers::todo::add(self.tasks.as_ref(), parsed).await,
            "todo.list" => handlers::todo::list(self.tasks.as_ref(), parsed).await,
            "todo.complete" => handlers::todo::complete(self.tasks.as_ref(), parsed).await,
            "todo.delete" => handlers::todo::delete(self.tasks.as_ref(), parsed).await,

            "time.start" => {
                handlers::timelog::start(self.time_entries.as_ref(), self.state.as_ref(), parsed)
                    .await
            }
            "time.stop" => {
                handlers::timelog::stop(self.time_entries.as_ref(), self.state.as_ref()).await
            }
            "time.status" => handlers::timelog::status(self.state.as_ref()).await,
            "time.log" => handlers::timelog::log(self.time_entries.as_ref(), parsed).await,
            "time.today" => handlers::timelog::today(self.time_entries.as_ref()).await,

            "cal.add" => handlers::calendar::add(self.events.as_ref(), parsed).await,
            "cal.today" => handlers::calendar::today(self.events.as_ref()).await,

            "note.add" => handlers::note::add(self.notes.as_ref(), parsed).await,
            "note.search" => handlers::note::search(self.notes.as_ref(), parsed).await,

            "help" => handlers::system::help(parsed),
            "history" => handlers::system::history(&self.session).await,
            "clear" => {
                self.session.lock().await.clear_transcript();
                Ok(CommandOutput::Silent)
            }
            "theme.change" => handlers::system::theme_change(self.state.as_ref(), raw_args).await,
            "sys.status" => handlers::system::status(self.nav.as_ref(), self.state.as_ref()).await,
            "sys.reload" => {
                // terminal case: the surface goes away, nothing to append
                if let Err(err) = self.nav.reload().await {
                    tracing::warn!(error = %err, "reload failed");
                }
                Ok(CommandOutput::Silent)
            }

            _ => Err(DeckError::UnknownCommand(name.to_string())),
        }
    }

    // ---- session access for front ends ----

    /// The transcript so far, in submission order.
    pub async fn transcript(&self) -> Vec<TranscriptEntry> {
        self.session.lock().await.transcript().to_vec()
    }

    /// Steps recall toward older entries and returns the new input buffer.
    pub async fn recall_previous(&self) -> String {
        let mut session = self.session.lock().await;
        session.recall_previous();
        session.input().to_string()
    }

    /// Steps recall toward newer entries and returns the new input buffer.
    pub async fn recall_next(&self) -> String {
        let mut session = self.session.lock().await;
        session.recall_next();
        session.input().to_string()
    }

    /// Replaces the input buffer without touching the recall cursor.
    pub async fn set_input(&self, text: &str) {
        self.session.lock().await.set_input(text);
    }

    /// The current theme preference.
    pub async fn theme(&self) -> Theme {
        self.state.theme().await
    }
}

/// Renders an error for the transcript.
///
/// Parse-level failures and unknown commands get the `ERROR:` prefix;
/// collaborator failures get `UPLINK ERROR:` so the two origins stay
/// distinguishable.
fn render_error(err: &DeckError) -> String {
    match err {
        DeckError::UnknownCommand(name) => {
            format!("ERROR: unknown command '{name}'. Type 'help' to list available commands.")
        }
        DeckError::Usage(message) => format!("ERROR: {message}"),
        other => format!("UPLINK ERROR: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_prefixes() {
        assert!(render_error(&DeckError::usage("task description required"))
            .starts_with("ERROR: task description required"));
        assert!(render_error(&DeckError::remote("backend offline"))
            .starts_with("UPLINK ERROR: backend offline"));
        assert!(
            render_error(&DeckError::UnknownCommand("frobnicate".to_string()))
                .contains("unknown command 'frobnicate'")
        );
    }
}
