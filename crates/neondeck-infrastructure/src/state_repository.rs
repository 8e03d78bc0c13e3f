//! File-backed durable state repository.
//!
//! Keeps an in-memory copy of the state and writes through to an atomic
//! TOML file, so readers never touch the disk. Writes from overlapping
//! commands resolve last-write-wins on the persisted value; the console
//! documents this hazard rather than serializing execution.

use crate::paths::DeckPaths;
use crate::toml_file::TomlFileStore;
use async_trait::async_trait;
use neondeck_core::error::{DeckError, Result};
use neondeck_core::state::{DeckState, StateRepository};
use neondeck_core::theme::Theme;
use neondeck_core::timer::ActiveTimer;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Durable state backed by a TOML file.
#[derive(Clone)]
pub struct FileStateRepository {
    /// Cached state, the source of truth for reads.
    state: Arc<Mutex<DeckState>>,
    store: Arc<TomlFileStore<DeckState>>,
}

impl FileStateRepository {
    /// Opens (or initializes) the state file at `path` and loads it.
    ///
    /// A missing or unreadable file falls back to defaults (theme `purple`,
    /// no active timer) instead of failing startup; the corrupt content is
    /// overwritten on the next write.
    pub fn open(path: PathBuf) -> Self {
        let store = TomlFileStore::new(path);
        let state = match store.load() {
            Ok(Some(state)) => state,
            Ok(None) => DeckState::default(),
            Err(err) => {
                tracing::warn!(error = %err, "state file unreadable, using defaults");
                DeckState::default()
            }
        };
        Self {
            state: Arc::new(Mutex::new(state)),
            store: Arc::new(store),
        }
    }

    /// Opens the state file at its default platform location.
    pub fn open_default() -> Result<Self> {
        Ok(Self::open(DeckPaths::state_file()?))
    }

    /// Updates the cache and writes the whole document through.
    async fn save(&self, state: DeckState) -> Result<()> {
        {
            let mut cached = self.state.lock().await;
            *cached = state.clone();
        }

        let store = self.store.clone();
        tokio::task::spawn_blocking(move || store.save(&state))
            .await
            .map_err(|e| DeckError::internal(format!("state save task failed: {e}")))?
    }
}

#[async_trait]
impl StateRepository for FileStateRepository {
    async fn theme(&self) -> Theme {
        self.state.lock().await.theme
    }

    async fn set_theme(&self, theme: Theme) -> Result<()> {
        let mut state = self.state.lock().await.clone();
        state.theme = theme;
        self.save(state).await
    }

    async fn active_timer(&self) -> Option<ActiveTimer> {
        self.state.lock().await.active_timer.clone()
    }

    async fn set_active_timer(&self, timer: ActiveTimer) -> Result<()> {
        let mut state = self.state.lock().await.clone();
        state.active_timer = Some(timer);
        self.save(state).await
    }

    async fn clear_active_timer(&self) -> Result<()> {
        let mut state = self.state.lock().await.clone();
        state.active_timer = None;
        self.save(state).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_defaults_for_fresh_file() {
        let dir = TempDir::new().unwrap();
        let repo = FileStateRepository::open(dir.path().join("state.toml"));
        assert_eq!(repo.theme().await, Theme::Purple);
        assert!(repo.active_timer().await.is_none());
    }

    #[tokio::test]
    async fn test_theme_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.toml");

        let repo = FileStateRepository::open(path.clone());
        repo.set_theme(Theme::Green).await.unwrap();

        let reopened = FileStateRepository::open(path);
        assert_eq!(reopened.theme().await, Theme::Green);
    }

    #[tokio::test]
    async fn test_timer_set_and_clear_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.toml");

        let repo = FileStateRepository::open(path.clone());
        let timer = ActiveTimer::start("focus block", Utc::now());
        repo.set_active_timer(timer.clone()).await.unwrap();

        let reopened = FileStateRepository::open(path.clone());
        assert_eq!(reopened.active_timer().await, Some(timer));

        reopened.clear_active_timer().await.unwrap();
        let cleared = FileStateRepository::open(path);
        assert!(cleared.active_timer().await.is_none());
    }

    #[tokio::test]
    async fn test_corrupt_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.toml");
        std::fs::write(&path, "theme = 12\n").unwrap();

        let repo = FileStateRepository::open(path);
        assert_eq!(repo.theme().await, Theme::Purple);
    }
}
