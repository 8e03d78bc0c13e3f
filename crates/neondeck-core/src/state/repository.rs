//! Durable state repository trait.

use crate::error::Result;
use crate::theme::Theme;
use crate::timer::ActiveTimer;
use async_trait::async_trait;

/// An abstract repository for console state that survives restarts.
///
/// Readers are infallible and answer from whatever state was last loaded;
/// writers persist through to the backing store. Reads and writes of the
/// timer and theme are independent read-modify-write operations with no
/// cross-command lock: two overlapping writers resolve last-write-wins.
#[async_trait]
pub trait StateRepository: Send + Sync {
    /// The persisted theme preference.
    async fn theme(&self) -> Theme;

    /// Persists a new theme preference.
    async fn set_theme(&self, theme: Theme) -> Result<()>;

    /// The persisted active timer, if one is running.
    async fn active_timer(&self) -> Option<ActiveTimer>;

    /// Persists the active timer, replacing any existing one.
    async fn set_active_timer(&self, timer: ActiveTimer) -> Result<()>;

    /// Clears the active timer.
    async fn clear_active_timer(&self) -> Result<()>;
}
