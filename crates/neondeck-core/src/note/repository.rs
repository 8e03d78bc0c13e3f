//! Note repository trait.

use super::model::{NewNote, Note};
use anyhow::Result;
use async_trait::async_trait;

/// An abstract repository for note persistence.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Creates a note and returns the stored record.
    async fn create(&self, draft: NewNote) -> Result<Note>;

    /// Case-insensitive substring search over title and content.
    async fn search(&self, keyword: &str) -> Result<Vec<Note>>;
}
