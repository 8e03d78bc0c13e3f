//! Time-tracking commands: start, stop, status, log, today.

use super::remote;
use crate::args::{strip_quotes, ParsedArgs};
use crate::console::CommandOutput;
use chrono::Utc;
use neondeck_core::error::{DeckError, Result};
use neondeck_core::state::StateRepository;
use neondeck_core::timelog::{NewTimeEntry, TimeEntryRepository};
use neondeck_core::timer::ActiveTimer;

/// How many entries `time.today` lists after the total.
const TODAY_LISTING_LIMIT: usize = 5;

pub async fn start(
    entries: &dyn TimeEntryRepository,
    state: &dyn StateRepository,
    args: &ParsedArgs,
) -> Result<CommandOutput> {
    let activity = args.joined_text();
    if activity.is_empty() {
        return Err(DeckError::usage(
            "activity label required. Usage: time.start <activity>",
        ));
    }

    let now = Utc::now();
    let mut lines = Vec::new();

    // a running timer is finalized first; at most one exists at any time
    if let Some(previous) = state.active_timer().await {
        let minutes = previous.elapsed_minutes(now);
        entries
            .create(NewTimeEntry {
                activity: previous.activity.clone(),
                minutes,
                date: now.date_naive(),
            })
            .await
            .map_err(remote)?;
        lines.push(format!(
            "stopped: {} ({} min logged)",
            previous.activity, minutes
        ));
    }

    state
        .set_active_timer(ActiveTimer::start(activity.clone(), now))
        .await
        .map_err(remote)?;
    lines.push(format!("timer started: {activity}"));
    Ok(CommandOutput::success(lines))
}

pub async fn stop(
    entries: &dyn TimeEntryRepository,
    state: &dyn StateRepository,
) -> Result<CommandOutput> {
    let Some(timer) = state.active_timer().await else {
        return Err(DeckError::usage("no active timer"));
    };

    let now = Utc::now();
    let minutes = timer.elapsed_minutes(now);
    entries
        .create(NewTimeEntry {
            activity: timer.activity.clone(),
            minutes,
            date: now.date_naive(),
        })
        .await
        .map_err(remote)?;
    state.clear_active_timer().await.map_err(remote)?;

    Ok(CommandOutput::success(vec![format!(
        "stopped: {} ({} min logged)",
        timer.activity, minutes
    )]))
}

pub async fn status(state: &dyn StateRepository) -> Result<CommandOutput> {
    match state.active_timer().await {
        None => Ok(CommandOutput::info(vec!["no active timer".to_string()])),
        Some(timer) => {
            let now = Utc::now();
            Ok(CommandOutput::success(vec![
                format!("tracking: {}", timer.activity),
                format!("started: {}", timer.started_at.format("%H:%M:%S")),
                format!("elapsed: {} min", timer.elapsed_minutes(now)),
            ]))
        }
    }
}

pub async fn log(entries: &dyn TimeEntryRepository, args: &ParsedArgs) -> Result<CommandOutput> {
    let Some((minutes_raw, activity_tokens)) = args.positional.split_last() else {
        return Err(DeckError::usage(
            "activity and minutes required. Usage: time.log <activity> <minutes>",
        ));
    };
    if activity_tokens.is_empty() {
        return Err(DeckError::usage(
            "activity and minutes required. Usage: time.log <activity> <minutes>",
        ));
    }
    let minutes: i64 = minutes_raw.parse().map_err(|_| {
        DeckError::usage(format!("minutes must be an integer, got '{minutes_raw}'"))
    })?;
    let activity = strip_quotes(&activity_tokens.join(" ")).to_string();

    let entry = entries
        .create(NewTimeEntry {
            activity,
            minutes,
            date: Utc::now().date_naive(),
        })
        .await
        .map_err(remote)?;
    Ok(CommandOutput::success(vec![format!(
        "logged: {} ({} min)",
        entry.activity, entry.minutes
    )]))
}

pub async fn today(entries: &dyn TimeEntryRepository) -> Result<CommandOutput> {
    let today = Utc::now().date_naive();
    let mut items = entries.list_for_date(today).await.map_err(remote)?;
    if items.is_empty() {
        return Ok(CommandOutput::info(vec!["no time logged today".to_string()]));
    }

    let total: i64 = items.iter().map(|entry| entry.minutes).sum();
    let mut lines = vec![format!(
        "today: {} min across {} entries",
        total,
        items.len()
    )];
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    for entry in items.iter().take(TODAY_LISTING_LIMIT) {
        lines.push(format!("- {} ({} min)", entry.activity, entry.minutes));
    }
    Ok(CommandOutput::success(lines))
}
