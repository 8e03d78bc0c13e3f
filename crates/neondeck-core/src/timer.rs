//! Active time-tracking session model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The single in-progress time-tracking session, if any.
///
/// At most one instance exists at a time; starting a new timer implicitly
/// finalizes the previous one. Persisted through the state repository so it
/// survives restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveTimer {
    /// What is being tracked, as entered by the user.
    pub activity: String,
    /// When tracking began (UTC).
    pub started_at: DateTime<Utc>,
}

impl ActiveTimer {
    /// Starts a timer for `activity` at `now`.
    pub fn start(activity: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            activity: activity.into(),
            started_at: now,
        }
    }

    /// Whole minutes elapsed between the start and `now`, floored.
    pub fn elapsed_minutes(&self, now: DateTime<Utc>) -> i64 {
        (now - self.started_at).num_minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_elapsed_floors_to_whole_minutes() {
        let now = Utc::now();
        let timer = ActiveTimer::start("deep work", now - Duration::seconds(125));
        assert_eq!(timer.elapsed_minutes(now), 2);
    }

    #[test]
    fn test_elapsed_zero_for_fresh_timer() {
        let now = Utc::now();
        let timer = ActiveTimer::start("standup", now);
        assert_eq!(timer.elapsed_minutes(now), 0);
    }
}
