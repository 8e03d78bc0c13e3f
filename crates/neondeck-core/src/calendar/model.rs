//! Calendar event domain model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A calendar event on a specific day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Opaque identifier assigned by the repository.
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Fields needed to create a calendar event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCalendarEvent {
    pub title: String,
    pub date: NaiveDate,
}
