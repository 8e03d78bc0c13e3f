//! Task commands: add, list, complete, delete.

use super::remote;
use crate::args::ParsedArgs;
use crate::console::CommandOutput;
use neondeck_core::error::{DeckError, Result};
use neondeck_core::task::{NewTask, Priority, Task, TaskRepository};

pub async fn add(tasks: &dyn TaskRepository, args: &ParsedArgs) -> Result<CommandOutput> {
    let text = args.joined_text();
    if text.is_empty() {
        return Err(DeckError::usage(
            "task description required. Usage: todo.add <text> [--priority low|medium|high]",
        ));
    }
    let priority = parse_priority(args)?.unwrap_or_default();

    let task = tasks
        .create(NewTask { text, priority })
        .await
        .map_err(remote)?;
    Ok(CommandOutput::success(vec![format!(
        "task added: {} [{}] ({})",
        task.text,
        priority_label(&task),
        task.short_id()
    )]))
}

pub async fn list(tasks: &dyn TaskRepository, args: &ParsedArgs) -> Result<CommandOutput> {
    let filter = parse_priority(args)?;
    let items = tasks.list(filter).await.map_err(remote)?;
    if items.is_empty() {
        return Ok(CommandOutput::info(vec!["no tasks found".to_string()]));
    }
    let lines = items
        .iter()
        .enumerate()
        .map(|(index, task)| {
            format!(
                "{}. [{}] {} [{}] ({})",
                index + 1,
                if task.completed { "x" } else { " " },
                task.text,
                priority_label(task),
                task.short_id()
            )
        })
        .collect();
    Ok(CommandOutput::success(lines))
}

pub async fn complete(tasks: &dyn TaskRepository, args: &ParsedArgs) -> Result<CommandOutput> {
    let id = require_id(args, "todo.complete")?;
    let task = tasks.complete(id).await.map_err(remote)?;
    Ok(CommandOutput::success(vec![format!(
        "task completed: {} ({})",
        task.text,
        task.short_id()
    )]))
}

pub async fn delete(tasks: &dyn TaskRepository, args: &ParsedArgs) -> Result<CommandOutput> {
    let id = require_id(args, "todo.delete")?;
    tasks.delete(id).await.map_err(remote)?;
    Ok(CommandOutput::success(vec![format!("task deleted: {id}")]))
}

fn require_id<'a>(args: &'a ParsedArgs, command: &str) -> Result<&'a str> {
    args.positional
        .first()
        .map(String::as_str)
        .ok_or_else(|| DeckError::usage(format!("task id required. Usage: {command} <id>")))
}

fn parse_priority(args: &ParsedArgs) -> Result<Option<Priority>> {
    match args.flag("priority") {
        None => Ok(None),
        Some(raw) => Priority::parse(raw).map(Some).ok_or_else(|| {
            DeckError::usage(format!(
                "invalid priority '{raw}'. Valid: {}",
                Priority::options()
            ))
        }),
    }
}

fn priority_label(task: &Task) -> String {
    task.priority.to_string().to_uppercase()
}
