//! Note commands: add, search.

use super::remote;
use crate::args::{strip_quotes, ParsedArgs};
use crate::console::CommandOutput;
use neondeck_core::error::{DeckError, Result};
use neondeck_core::note::{NewNote, NoteRepository};

pub async fn add(notes: &dyn NoteRepository, args: &ParsedArgs) -> Result<CommandOutput> {
    let [title_raw, content_tokens @ ..] = args.positional.as_slice() else {
        return Err(DeckError::usage(
            "note title and content required. Usage: note.add <title> <content>",
        ));
    };
    if content_tokens.is_empty() {
        return Err(DeckError::usage(
            "note title and content required. Usage: note.add <title> <content>",
        ));
    }

    let title = strip_quotes(title_raw).to_string();
    let content = strip_quotes(&content_tokens.join(" ")).to_string();
    let tags = parse_tags(args.flag("tags"));

    let note = notes
        .create(NewNote {
            title,
            content,
            tags,
        })
        .await
        .map_err(remote)?;

    let mut lines = vec![format!("note saved: {} ({})", note.title, note.short_id())];
    if !note.tags.is_empty() {
        lines.push(format!("tags: {}", note.tags.join(", ")));
    }
    Ok(CommandOutput::success(lines))
}

pub async fn search(notes: &dyn NoteRepository, args: &ParsedArgs) -> Result<CommandOutput> {
    let keyword = args.joined_text();
    if keyword.is_empty() {
        return Err(DeckError::usage(
            "search keyword required. Usage: note.search <keyword>",
        ));
    }

    let matches = notes.search(&keyword).await.map_err(remote)?;
    if matches.is_empty() {
        return Ok(CommandOutput::info(vec![format!(
            "no notes matched '{keyword}'"
        )]));
    }
    let lines = matches
        .iter()
        .map(|note| format!("- {} ({})", note.title, note.short_id()))
        .collect();
    Ok(CommandOutput::success(lines))
}

/// Splits a comma-separated tag list, trimming each entry and dropping
/// empties.
fn parse_tags(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
