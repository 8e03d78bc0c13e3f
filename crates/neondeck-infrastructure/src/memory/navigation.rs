//! In-memory navigation surface.

use async_trait::async_trait;
use neondeck_core::error::Result;
use neondeck_core::nav::{NavigationService, View};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

/// A navigation surface that just records where it was sent.
///
/// Tests use `visits` to assert whether the collaborator was touched at all
/// (e.g. `nav.back` on an empty stack must not call it).
#[derive(Default)]
pub struct MemoryNavigation {
    current: RwLock<View>,
    visits: RwLock<Vec<View>>,
    reloads: AtomicUsize,
}

impl MemoryNavigation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every view this surface was navigated to, in order.
    pub async fn visits(&self) -> Vec<View> {
        self.visits.read().await.clone()
    }

    pub fn reload_count(&self) -> usize {
        self.reloads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NavigationService for MemoryNavigation {
    async fn go_to(&self, view: View) -> Result<()> {
        *self.current.write().await = view;
        self.visits.write().await.push(view);
        Ok(())
    }

    async fn current_view(&self) -> View {
        *self.current.read().await
    }

    async fn reload(&self) -> Result<()> {
        self.reloads.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_starts_on_dashboard() {
        let nav = MemoryNavigation::new();
        assert_eq!(nav.current_view().await, View::Dashboard);
        assert!(nav.visits().await.is_empty());
    }

    #[tokio::test]
    async fn test_go_to_updates_current_and_log() {
        let nav = MemoryNavigation::new();
        nav.go_to(View::Notes).await.unwrap();
        assert_eq!(nav.current_view().await, View::Notes);
        assert_eq!(nav.visits().await, vec![View::Notes]);
    }
}
