//! Durable console state model.

use crate::theme::Theme;
use crate::timer::ActiveTimer;
use serde::{Deserialize, Serialize};

/// Console state that persists across restarts.
///
/// Only two pieces of console state outlive a command: the active timer and
/// the theme preference. Everything else (transcript, history, navigation
/// stack) is session-local and rebuilt empty on startup.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeckState {
    /// Display theme; absent or invalid values fall back to the default.
    #[serde(default)]
    pub theme: Theme,

    /// The in-progress time-tracking session, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_timer: Option<ActiveTimer>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = DeckState::default();
        assert_eq!(state.theme, Theme::Purple);
        assert!(state.active_timer.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let state = DeckState {
            theme: Theme::Green,
            active_timer: Some(ActiveTimer::start("focus", chrono::Utc::now())),
        };
        let text = toml::to_string(&state).unwrap();
        let back: DeckState = toml::from_str(&text).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let state: DeckState = toml::from_str("").unwrap();
        assert_eq!(state.theme, Theme::Purple);
        assert!(state.active_timer.is_none());
    }
}
