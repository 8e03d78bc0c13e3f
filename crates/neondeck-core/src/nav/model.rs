//! View identifiers for the navigation surface.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumString};

/// The views the console can switch between.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Dashboard,
    Todos,
    Timelog,
    Calendar,
    Notes,
}

impl View {
    /// Parses a navigation target as entered on the console.
    ///
    /// `tasks` is accepted as a synonym for the todos view.
    pub fn parse(raw: &str) -> Option<View> {
        let name = raw.trim().to_ascii_lowercase();
        if name == "tasks" {
            return Some(View::Todos);
        }
        View::from_str(&name).ok()
    }
}
