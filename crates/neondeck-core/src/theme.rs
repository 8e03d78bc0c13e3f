//! Display theme preference.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::VariantNames;
use strum_macros::{Display, EnumString};

/// The console's display theme.
///
/// A closed set; anything absent or invalid in persisted state falls back to
/// the default (`Purple`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    VariantNames,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Green,
    #[default]
    Purple,
    Red,
    Black,
}

impl Theme {
    /// Parses a theme argument as entered on the console.
    ///
    /// The argument may carry a leading `-` (e.g. `-green`); matching is
    /// case-insensitive.
    pub fn parse(raw: &str) -> Option<Theme> {
        let name = raw.trim().trim_start_matches('-').to_ascii_lowercase();
        Theme::from_str(&name).ok()
    }

    /// Comma-separated list of valid theme names, for error messages.
    pub fn options() -> String {
        Theme::VARIANTS.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_purple() {
        assert_eq!(Theme::default(), Theme::Purple);
    }

    #[test]
    fn test_parse_plain_and_dashed() {
        assert_eq!(Theme::parse("green"), Some(Theme::Green));
        assert_eq!(Theme::parse("-green"), Some(Theme::Green));
        assert_eq!(Theme::parse("RED"), Some(Theme::Red));
        assert_eq!(Theme::parse("bogus"), None);
    }

    #[test]
    fn test_options_lists_all() {
        let options = Theme::options();
        for name in ["green", "purple", "red", "black"] {
            assert!(options.contains(name), "missing {name} in {options}");
        }
    }

    #[test]
    fn test_display_lowercase() {
        assert_eq!(Theme::Purple.to_string(), "purple");
    }
}
