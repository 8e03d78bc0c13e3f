//! In-memory repositories for the four record kinds.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use neondeck_core::calendar::{CalendarEvent, CalendarEventRepository, NewCalendarEvent};
use neondeck_core::error::DeckError;
use neondeck_core::note::{NewNote, Note, NoteRepository};
use neondeck_core::task::{NewTask, Priority, Task, TaskRepository};
use neondeck_core::timelog::{NewTimeEntry, TimeEntry, TimeEntryRepository};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Resolves an id reference against a collection, accepting the full id or
/// an unambiguous prefix.
fn resolve_index<T>(
    items: &[T],
    reference: &str,
    entity: &'static str,
    id_of: impl Fn(&T) -> &str,
) -> Result<usize> {
    if let Some(index) = items.iter().position(|item| id_of(item) == reference) {
        return Ok(index);
    }
    let matches: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| id_of(item).starts_with(reference))
        .map(|(index, _)| index)
        .collect();
    match matches.as_slice() {
        [only] => Ok(*only),
        [] => Err(DeckError::not_found(entity, reference).into()),
        _ => Err(anyhow!("ambiguous {entity} reference '{reference}'")),
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

// ---- tasks ----

#[derive(Default)]
pub struct MemoryTaskRepository {
    tasks: RwLock<Vec<Task>>,
}

#[async_trait]
impl TaskRepository for MemoryTaskRepository {
    async fn create(&self, draft: NewTask) -> Result<Task> {
        let task = Task {
            id: new_id(),
            text: draft.text,
            priority: draft.priority,
            completed: false,
            created_at: Utc::now(),
        };
        self.tasks.write().await.push(task.clone());
        Ok(task)
    }

    async fn list(&self, priority: Option<Priority>) -> Result<Vec<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks
            .iter()
            .filter(|task| priority.is_none_or(|p| task.priority == p))
            .cloned()
            .collect())
    }

    async fn complete(&self, id: &str) -> Result<Task> {
        let mut tasks = self.tasks.write().await;
        let index = resolve_index(&tasks, id, "task", |task| &task.id)?;
        tasks[index].completed = true;
        Ok(tasks[index].clone())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut tasks = self.tasks.write().await;
        let index = resolve_index(&tasks, id, "task", |task| &task.id)?;
        tasks.remove(index);
        Ok(())
    }
}

// ---- time entries ----

#[derive(Default)]
pub struct MemoryTimeEntryRepository {
    entries: RwLock<Vec<TimeEntry>>,
}

#[async_trait]
impl TimeEntryRepository for MemoryTimeEntryRepository {
    async fn create(&self, draft: NewTimeEntry) -> Result<TimeEntry> {
        let entry = TimeEntry {
            id: new_id(),
            activity: draft.activity,
            minutes: draft.minutes,
            date: draft.date,
            created_at: Utc::now(),
        };
        self.entries.write().await.push(entry.clone());
        Ok(entry)
    }

    async fn list_for_date(&self, date: NaiveDate) -> Result<Vec<TimeEntry>> {
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .filter(|entry| entry.date == date)
            .cloned()
            .collect())
    }
}

// ---- calendar events ----

#[derive(Default)]
pub struct MemoryCalendarEventRepository {
    events: RwLock<Vec<CalendarEvent>>,
}

#[async_trait]
impl CalendarEventRepository for MemoryCalendarEventRepository {
    async fn create(&self, draft: NewCalendarEvent) -> Result<CalendarEvent> {
        let event = CalendarEvent {
            id: new_id(),
            title: draft.title,
            date: draft.date,
            created_at: Utc::now(),
        };
        self.events.write().await.push(event.clone());
        Ok(event)
    }

    async fn list_for_date(&self, date: NaiveDate) -> Result<Vec<CalendarEvent>> {
        let events = self.events.read().await;
        Ok(events
            .iter()
            .filter(|event| event.date == date)
            .cloned()
            .collect())
    }
}

// ---- notes ----

#[derive(Default)]
pub struct MemoryNoteRepository {
    notes: RwLock<Vec<Note>>,
}

#[async_trait]
impl NoteRepository for MemoryNoteRepository {
    async fn create(&self, draft: NewNote) -> Result<Note> {
        let note = Note {
            id: new_id(),
            title: draft.title,
            content: draft.content,
            tags: draft.tags,
            created_at: Utc::now(),
        };
        self.notes.write().await.push(note.clone());
        Ok(note)
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Note>> {
        let notes = self.notes.read().await;
        Ok(notes
            .iter()
            .filter(|note| note.matches(keyword))
            .cloned()
            .collect())
    }
}
