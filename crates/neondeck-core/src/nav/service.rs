//! Navigation surface trait.

use super::model::View;
use crate::error::Result;
use async_trait::async_trait;

/// The navigation collaborator: the shell hosting the console.
///
/// The console calls into this to switch views; it never renders views
/// itself. `reload` tears the surface down entirely, so callers must not
/// expect any further output to land after invoking it.
#[async_trait]
pub trait NavigationService: Send + Sync {
    /// Switches the active view.
    async fn go_to(&self, view: View) -> Result<()>;

    /// Reports the currently active view.
    async fn current_view(&self) -> View;

    /// Performs a full reload of the hosting surface.
    async fn reload(&self) -> Result<()>;
}
