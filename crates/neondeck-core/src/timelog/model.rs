//! Time entry domain model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A completed block of tracked time.
///
/// Produced either by stopping an active timer (elapsed whole minutes) or
/// directly through the manual `time.log` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Opaque identifier assigned by the repository.
    pub id: String,
    /// What the time was spent on.
    pub activity: String,
    /// Duration in whole minutes.
    pub minutes: i64,
    /// The day the entry belongs to.
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Fields needed to create a time entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTimeEntry {
    pub activity: String,
    pub minutes: i64,
    pub date: NaiveDate,
}
