//! System commands: help, history, theme, status.

use super::remote;
use crate::args::ParsedArgs;
use crate::catalog::{self, CommandFamily};
use crate::console::CommandOutput;
use crate::session::ConsoleSession;
use chrono::Utc;
use neondeck_core::error::{DeckError, Result};
use neondeck_core::nav::NavigationService;
use neondeck_core::state::StateRepository;
use neondeck_core::theme::Theme;
use tokio::sync::Mutex;

/// How many history entries the `history` command shows.
const HISTORY_LISTING_LIMIT: usize = 10;

/// `help` with no argument lists every command grouped by family; with an
/// argument it shows that command's detailed help.
pub fn help(args: &ParsedArgs) -> Result<CommandOutput> {
    match args.positional.first() {
        None => {
            let mut lines = Vec::new();
            for family in CommandFamily::all() {
                lines.push(format!("{}:", family.label()));
                for spec in catalog::catalog().iter().filter(|c| c.family == *family) {
                    lines.push(format!("  {:<42} {}", spec.usage, spec.description));
                }
            }
            Ok(CommandOutput::info(lines))
        }
        Some(name) => match catalog::find_command(name) {
            None => Ok(CommandOutput::info(vec![format!(
                "no help available for '{name}'"
            )])),
            Some(spec) => {
                let mut lines = vec![spec.usage.to_string(), spec.description.to_string()];
                if let Some(detail) = spec.detail {
                    lines.push(detail.to_string());
                }
                Ok(CommandOutput::info(lines))
            }
        },
    }
}

/// Lists the most recent history entries with absolute 1-based numbering.
pub async fn history(session: &Mutex<ConsoleSession>) -> Result<CommandOutput> {
    let session = session.lock().await;
    let recent = session.recent_history(HISTORY_LISTING_LIMIT);
    if recent.is_empty() {
        return Ok(CommandOutput::info(vec!["no history yet".to_string()]));
    }
    let lines = recent
        .iter()
        .map(|(number, raw)| format!("{number:>3}  {raw}"))
        .collect();
    Ok(CommandOutput::info(lines))
}

/// Validates and persists a theme change.
///
/// Reads the raw token stream instead of the parsed flags: the argument may
/// be written `-green`, which the flag scanner would otherwise swallow as an
/// unknown short flag.
pub async fn theme_change(
    state: &dyn StateRepository,
    raw_args: &[String],
) -> Result<CommandOutput> {
    let Some(raw) = raw_args.first() else {
        return Err(DeckError::usage(format!(
            "theme required. Valid options: {}",
            Theme::options()
        )));
    };
    let Some(theme) = Theme::parse(raw) else {
        return Err(DeckError::usage(format!(
            "invalid theme '{raw}'. Valid options: {}",
            Theme::options()
        )));
    };
    state.set_theme(theme).await.map_err(remote)?;
    Ok(CommandOutput::success(vec![format!("theme set: {theme}")]))
}

/// Reports the static online indicators plus live session facts.
pub async fn status(
    nav: &dyn NavigationService,
    state: &dyn StateRepository,
) -> Result<CommandOutput> {
    let view = nav.current_view().await;
    let timer_line = match state.active_timer().await {
        Some(timer) => format!("timer: {}", timer.activity),
        None => "timer: idle".to_string(),
    };
    Ok(CommandOutput::info(vec![
        "core: online".to_string(),
        "uplink: online".to_string(),
        format!("view: {view}"),
        timer_line,
        format!("time: {}", Utc::now().format("%H:%M:%S UTC")),
    ]))
}
