//! Calendar event repository trait.

use super::model::{CalendarEvent, NewCalendarEvent};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// An abstract repository for calendar event persistence.
#[async_trait]
pub trait CalendarEventRepository: Send + Sync {
    /// Creates an event and returns the stored record.
    async fn create(&self, draft: NewCalendarEvent) -> Result<CalendarEvent>;

    /// Lists events for a given day, in creation order.
    async fn list_for_date(&self, date: NaiveDate) -> Result<Vec<CalendarEvent>>;
}
