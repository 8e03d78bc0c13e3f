//! In-memory durable-state repository.

use async_trait::async_trait;
use neondeck_core::error::Result;
use neondeck_core::state::{DeckState, StateRepository};
use neondeck_core::theme::Theme;
use neondeck_core::timer::ActiveTimer;
use tokio::sync::Mutex;

/// A state repository with no backing file.
///
/// Nothing survives the process; useful for tests and as a fallback when no
/// writable state location exists.
#[derive(Default)]
pub struct MemoryStateRepository {
    state: Mutex<DeckState>,
}

impl MemoryStateRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StateRepository for MemoryStateRepository {
    async fn theme(&self) -> Theme {
        self.state.lock().await.theme
    }

    async fn set_theme(&self, theme: Theme) -> Result<()> {
        self.state.lock().await.theme = theme;
        Ok(())
    }

    async fn active_timer(&self) -> Option<ActiveTimer> {
        self.state.lock().await.active_timer.clone()
    }

    async fn set_active_timer(&self, timer: ActiveTimer) -> Result<()> {
        self.state.lock().await.active_timer = Some(timer);
        Ok(())
    }

    async fn clear_active_timer(&self) -> Result<()> {
        self.state.lock().await.active_timer = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn test_defaults() {
        let repo = MemoryStateRepository::new();
        assert_eq!(repo.theme().await, Theme::Purple);
        assert!(repo.active_timer().await.is_none());
    }

    #[tokio::test]
    async fn test_timer_replace_and_clear() {
        let repo = MemoryStateRepository::new();
        repo.set_active_timer(ActiveTimer::start("a", Utc::now()))
            .await
            .unwrap();
        repo.set_active_timer(ActiveTimer::start("b", Utc::now()))
            .await
            .unwrap();
        assert_eq!(repo.active_timer().await.unwrap().activity, "b");

        repo.clear_active_timer().await.unwrap();
        assert!(repo.active_timer().await.is_none());
    }
}
