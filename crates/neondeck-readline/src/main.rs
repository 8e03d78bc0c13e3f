use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;

use anyhow::Result;
use colored::{Color, Colorize};
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::Editor;
use rustyline::{Context, Helper};
use tokio::sync::mpsc;

use neondeck_console::{catalog, Console, EntryKind, TranscriptEntry};
use neondeck_core::nav::NavigationService;
use neondeck_core::state::StateRepository;
use neondeck_core::theme::Theme;
use neondeck_infrastructure::{
    FileStateRepository, MemoryCalendarEventRepository, MemoryNavigation, MemoryNoteRepository,
    MemoryStateRepository, MemoryTaskRepository, MemoryTimeEntryRepository,
};

/// CLI helper for rustyline that provides completion, highlighting, and
/// hints over the command catalog.
#[derive(Clone)]
struct DeckHelper {
    commands: Vec<String>,
}

impl DeckHelper {
    fn new() -> Self {
        Self {
            commands: catalog::command_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

impl Helper for DeckHelper {}

impl Completer for DeckHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        // only complete the command word itself
        if line.contains(' ') {
            return Ok((0, vec![]));
        }
        let candidates: Vec<Pair> = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for DeckHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let command = line.split_whitespace().next().unwrap_or("");
        if self.commands.iter().any(|c| c == command) {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for DeckHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if !line.is_empty() && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for DeckHelper {}

/// Terminal color for a theme.
fn theme_color(theme: Theme) -> Color {
    match theme {
        Theme::Green => Color::BrightGreen,
        Theme::Purple => Color::BrightMagenta,
        Theme::Red => Color::BrightRed,
        Theme::Black => Color::BrightBlack,
    }
}

/// Prints one transcript entry, colored by classification.
fn render_entry(entry: &TranscriptEntry, theme: Theme) {
    for line in &entry.output_lines {
        match entry.kind {
            EntryKind::Error => println!("{}", line.red()),
            EntryKind::Info => println!("{}", line.bright_black()),
            EntryKind::Success => println!("{}", line.color(theme_color(theme))),
        }
    }
}

/// The main entry point for the neondeck console REPL.
///
/// Sets up the console with in-memory record repositories, a file-backed
/// state store (falling back to in-memory when no config dir exists), and a
/// rustyline editor with command completion. Each submission is executed on
/// its own task so a slow collaborator call never blocks further typing.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // ===== Collaborator wiring =====
    let state: Arc<dyn StateRepository> = match FileStateRepository::open_default() {
        Ok(repo) => Arc::new(repo),
        Err(err) => {
            tracing::warn!(error = %err, "no state file location, state will not persist");
            Arc::new(MemoryStateRepository::new())
        }
    };
    let nav: Arc<dyn NavigationService> = Arc::new(MemoryNavigation::new());
    let console = Arc::new(Console::new(
        Arc::new(MemoryTaskRepository::default()),
        Arc::new(MemoryTimeEntryRepository::default()),
        Arc::new(MemoryCalendarEventRepository::default()),
        Arc::new(MemoryNoteRepository::default()),
        nav,
        state.clone(),
    ));

    // Completed commands come back through a channel so overlapping
    // executions never interleave their output lines.
    let (entry_tx, mut entry_rx) = mpsc::channel::<TranscriptEntry>(32);

    let render_state = state.clone();
    let renderer = tokio::spawn(async move {
        while let Some(entry) = entry_rx.recv().await {
            let theme = render_state.theme().await;
            render_entry(&entry, theme);
        }
    });

    // ===== REPL setup =====
    let mut rl = Editor::new()?;
    rl.set_helper(Some(DeckHelper::new()));

    println!("{}", "=== neondeck console ===".bright_magenta().bold());
    println!(
        "{}",
        "Type 'help' for available commands, 'quit' to exit.".bright_black()
    );
    println!();

    // ===== Main REPL loop =====
    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                let tx = entry_tx.clone();
                let console = Arc::clone(&console);
                let input = trimmed.to_string();

                tokio::spawn(async move {
                    if let Some(entry) = console.execute(&input).await {
                        let _ = tx.send(entry).await;
                    }
                });
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        }
    }

    // Drop the sender to let the renderer drain and finish
    drop(entry_tx);
    let _ = renderer.await;

    Ok(())
}
