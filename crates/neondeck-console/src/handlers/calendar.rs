//! Calendar commands: add, today.

use super::remote;
use crate::args::ParsedArgs;
use crate::console::CommandOutput;
use chrono::{NaiveDate, Utc};
use neondeck_core::calendar::{CalendarEventRepository, NewCalendarEvent};
use neondeck_core::error::{DeckError, Result};

pub async fn add(
    events: &dyn CalendarEventRepository,
    args: &ParsedArgs,
) -> Result<CommandOutput> {
    let title = args.joined_text();
    if title.is_empty() {
        return Err(DeckError::usage(
            "event title required. Usage: cal.add <title> [--date YYYY-MM-DD]",
        ));
    }

    let date = match args.flag("date") {
        None => Utc::now().date_naive(),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
            DeckError::usage(format!("invalid date '{raw}' (expected YYYY-MM-DD)"))
        })?,
    };

    let event = events
        .create(NewCalendarEvent { title, date })
        .await
        .map_err(remote)?;
    Ok(CommandOutput::success(vec![format!(
        "event added: {} on {}",
        event.title, event.date
    )]))
}

pub async fn today(events: &dyn CalendarEventRepository) -> Result<CommandOutput> {
    let today = Utc::now().date_naive();
    let items = events.list_for_date(today).await.map_err(remote)?;
    if items.is_empty() {
        return Ok(CommandOutput::info(vec!["no events today".to_string()]));
    }
    let mut lines = vec![format!("events on {today}:")];
    lines.extend(items.iter().map(|event| format!("- {}", event.title)));
    Ok(CommandOutput::success(lines))
}
