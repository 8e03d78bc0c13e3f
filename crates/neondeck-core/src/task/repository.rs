//! Task repository trait.
//!
//! Defines the interface for task persistence operations. The console only
//! ever references tasks by identifier or by the fields needed to create
//! them; it never caches records beyond a single command's execution.

use super::model::{NewTask, Priority, Task};
use anyhow::Result;
use async_trait::async_trait;

/// An abstract repository for task persistence.
///
/// Decouples the console from the specific storage mechanism (hosted table
/// service, in-memory store for tests). All operations are implicitly scoped
/// to the current user and may fail with a message string, which the console
/// surfaces verbatim.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Creates a task and returns the stored record.
    async fn create(&self, draft: NewTask) -> Result<Task>;

    /// Lists tasks, optionally filtered by priority, in creation order.
    async fn list(&self, priority: Option<Priority>) -> Result<Vec<Task>>;

    /// Marks the referenced task complete and returns the updated record.
    async fn complete(&self, id: &str) -> Result<Task>;

    /// Deletes the referenced task.
    async fn delete(&self, id: &str) -> Result<()>;
}
