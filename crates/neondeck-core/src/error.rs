//! Error types for the Neondeck console.

use thiserror::Error;

/// A shared error type for the whole deck.
///
/// The console distinguishes two failure origins when rendering: `Usage`
/// covers everything caught before a collaborator is called (missing
/// arguments, invalid enumerated values, unparseable integers and dates),
/// while `Remote` carries a collaborator's own reported message.
#[derive(Error, Debug, Clone)]
pub enum DeckError {
    /// The submitted command name is not in the catalog.
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    /// Malformed invocation, detected before any collaborator call.
    #[error("{0}")]
    Usage(String),

    /// A collaborator operation failed; the message is surfaced verbatim.
    #[error("{0}")]
    Remote(String),

    /// Entity not found error with type information.
    #[error("{entity_type} not found: '{reference}'")]
    NotFound {
        entity_type: &'static str,
        reference: String,
    },

    /// IO error (file system operations).
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error.
    #[error("serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// File locking error.
    #[error("lock error: {0}")]
    Lock(String),

    /// Internal error (should not happen in normal operation).
    #[error("internal error: {0}")]
    Internal(String),
}

impl DeckError {
    /// Creates a Usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Creates a Remote error from a collaborator failure.
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote(message.into())
    }

    /// Creates a NotFound error.
    pub fn not_found(entity_type: &'static str, reference: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            reference: reference.into(),
        }
    }

    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates an Internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a Usage error.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_) | Self::UnknownCommand(_))
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<std::io::Error> for DeckError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<toml::de::Error> for DeckError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for DeckError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, DeckError>`.
pub type Result<T> = std::result::Result<T, DeckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_classification() {
        assert!(DeckError::usage("todo text required").is_usage());
        assert!(DeckError::UnknownCommand("bogus".to_string()).is_usage());
        assert!(!DeckError::remote("backend offline").is_usage());
    }

    #[test]
    fn test_not_found_display() {
        let err = DeckError::not_found("task", "a1b2c3d4");
        assert_eq!(err.to_string(), "task not found: 'a1b2c3d4'");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_remote_preserves_message() {
        let err = DeckError::remote("constraint violation: duplicate id");
        assert_eq!(err.to_string(), "constraint violation: duplicate id");
    }
}
