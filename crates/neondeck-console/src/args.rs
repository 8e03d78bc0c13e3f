//! Argument parsing for console input lines.
//!
//! The tokenizer is plain whitespace splitting; quoting is not interpreted
//! at this level. Handlers that accept free text join the positional stream
//! back together and strip surrounding quotes themselves.

use std::collections::HashMap;

/// Alias table for single-letter flags.
///
/// Unknown short flags are dropped silently: they are neither positional
/// arguments nor errors, and they do not consume the following token.
const SHORT_FLAG_ALIASES: &[(char, &str)] = &[
    ('p', "priority"),
    ('d', "date"),
    ('t', "tags"),
    ('h', "help"),
    ('f', "format"),
];

/// A parsed invocation: ordered positional arguments plus named flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    pub positional: Vec<String>,
    pub flags: HashMap<String, String>,
}

impl ParsedArgs {
    /// Looks up a flag value by its long name.
    pub fn flag(&self, name: &str) -> Option<&str> {
        self.flags.get(name).map(String::as_str)
    }

    /// The positional arguments joined by single spaces, quotes stripped.
    pub fn joined_text(&self) -> String {
        strip_quotes(&self.positional.join(" ")).to_string()
    }
}

/// Strips surrounding double quotes from free-text input.
pub fn strip_quotes(text: &str) -> &str {
    text.trim().trim_matches('"').trim()
}

/// Parses the tokens following a command name.
///
/// - `--name=value` sets a long flag directly.
/// - `--name value` consumes the next token as the value; a trailing
///   `--name` with nothing after it gets an empty value.
/// - `-x value` consumes the next token if `x` is in the alias table.
/// - Everything else is positional, order preserved.
///
/// A token consumed as a flag value leaves the positional stream even if it
/// looks flag-like itself.
pub fn parse(tokens: &[String]) -> ParsedArgs {
    let mut positional = Vec::new();
    let mut flags = HashMap::new();

    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];

        if let Some(body) = token.strip_prefix("--") {
            if let Some((name, value)) = body.split_once('=') {
                flags.insert(name.to_string(), value.to_string());
            } else {
                let value = tokens.get(i + 1).cloned().unwrap_or_default();
                if i + 1 < tokens.len() {
                    i += 1;
                }
                flags.insert(body.to_string(), value);
            }
        } else if token.len() > 1 && token.starts_with('-') {
            let letter = token.chars().nth(1);
            let alias = letter.and_then(|l| {
                SHORT_FLAG_ALIASES
                    .iter()
                    .find(|(short, _)| *short == l)
                    .map(|(_, long)| *long)
            });
            if let Some(name) = alias {
                let value = tokens.get(i + 1).cloned().unwrap_or_default();
                if i + 1 < tokens.len() {
                    i += 1;
                }
                flags.insert(name.to_string(), value);
            }
            // unrecognized short flags fall through: dropped, next token kept
        } else {
            positional.push(token.clone());
        }

        i += 1;
    }

    ParsedArgs { positional, flags }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_long_flag_with_equals() {
        let args = parse(&tokens("buy milk --priority=high"));
        assert_eq!(args.positional, vec!["buy", "milk"]);
        assert_eq!(args.flag("priority"), Some("high"));
    }

    #[test]
    fn test_long_flag_consumes_next_token() {
        let args = parse(&tokens("--date 2026-08-06 standup"));
        assert_eq!(args.flag("date"), Some("2026-08-06"));
        assert_eq!(args.positional, vec!["standup"]);
    }

    #[test]
    fn test_long_flag_without_value_is_empty() {
        let args = parse(&tokens("list --help"));
        assert_eq!(args.flag("help"), Some(""));
        assert_eq!(args.positional, vec!["list"]);
    }

    #[test]
    fn test_short_flag_alias() {
        let args = parse(&tokens("\"Ship release\" -p high"));
        assert_eq!(args.flag("priority"), Some("high"));
        assert_eq!(args.joined_text(), "Ship release");
    }

    #[test]
    fn test_unknown_short_flag_dropped_silently() {
        let args = parse(&tokens("report -z weekly"));
        assert_eq!(args.positional, vec!["report", "weekly"]);
        assert!(args.flags.is_empty());
    }

    #[test]
    fn test_flag_value_removed_even_if_flag_like() {
        // the consumed value never re-enters the positional stream
        let args = parse(&tokens("-t --priority rest"));
        assert_eq!(args.flag("tags"), Some("--priority"));
        assert_eq!(args.positional, vec!["rest"]);
        assert!(args.flag("priority").is_none());
    }

    #[test]
    fn test_trailing_short_flag_gets_empty_value() {
        let args = parse(&tokens("notes -t"));
        assert_eq!(args.flag("tags"), Some(""));
        assert_eq!(args.positional, vec!["notes"]);
    }

    #[test]
    fn test_lone_dash_is_positional() {
        let args = parse(&tokens("a - b"));
        assert_eq!(args.positional, vec!["a", "-", "b"]);
    }

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("\"Ship release\""), "Ship release");
        assert_eq!(strip_quotes("plain"), "plain");
        assert_eq!(strip_quotes("  \"padded\"  "), "padded");
    }
}
