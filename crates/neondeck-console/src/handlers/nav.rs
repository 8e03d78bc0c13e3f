//! Navigation commands: view switching and the back stack.

use super::remote;
use crate::console::CommandOutput;
use crate::session::ConsoleSession;
use neondeck_core::error::{DeckError, Result};
use neondeck_core::nav::{NavigationService, View};
use tokio::sync::Mutex;

/// Switches to `view`, pushing the prior view onto the back stack first.
pub async fn go(
    nav: &dyn NavigationService,
    session: &Mutex<ConsoleSession>,
    view: View,
) -> Result<CommandOutput> {
    let prior = nav.current_view().await;
    session.lock().await.push_view(prior);
    nav.go_to(view).await.map_err(remote)?;
    Ok(CommandOutput::success(vec![format!("view: {view}")]))
}

/// Pops the back stack and navigates to the popped view.
///
/// An empty stack is an error and the navigation collaborator is not
/// touched.
pub async fn back(
    nav: &dyn NavigationService,
    session: &Mutex<ConsoleSession>,
) -> Result<CommandOutput> {
    let Some(previous) = session.lock().await.pop_view() else {
        return Err(DeckError::usage("navigation history is empty"));
    };
    nav.go_to(previous).await.map_err(remote)?;
    Ok(CommandOutput::success(vec![format!("view: {previous}")]))
}
