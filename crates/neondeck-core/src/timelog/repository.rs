//! Time entry repository trait.

use super::model::{NewTimeEntry, TimeEntry};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// An abstract repository for time entry persistence.
#[async_trait]
pub trait TimeEntryRepository: Send + Sync {
    /// Creates a time entry and returns the stored record.
    async fn create(&self, draft: NewTimeEntry) -> Result<TimeEntry>;

    /// Lists entries for a given day, in creation order.
    async fn list_for_date(&self, date: NaiveDate) -> Result<Vec<TimeEntry>>;
}
