//! Path resolution for neondeck's durable files.
//!
//! Everything the console persists lives under one per-user configuration
//! directory, resolved per platform.
//!
//! ```text
//! ~/.config/neondeck/          # Linux (XDG); platform-appropriate elsewhere
//! └── state.toml               # theme + active timer
//! ```

use neondeck_core::error::{DeckError, Result};
use std::path::PathBuf;

/// Unified path management for neondeck.
pub struct DeckPaths;

impl DeckPaths {
    /// The neondeck configuration directory.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("neondeck"))
            .ok_or_else(|| DeckError::io("cannot determine config directory"))
    }

    /// The durable console state file.
    pub fn state_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("state.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_file_under_config_dir() {
        let state = DeckPaths::state_file().unwrap();
        let config = DeckPaths::config_dir().unwrap();
        assert!(state.starts_with(&config));
        assert_eq!(state.file_name().unwrap(), "state.toml");
    }
}
