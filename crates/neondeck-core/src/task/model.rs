//! Task domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::VariantNames;
use strum_macros::{Display, EnumString};

/// Task priority, a closed set with `medium` as the default.
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
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Parses a priority argument, case-insensitively.
    pub fn parse(raw: &str) -> Option<Priority> {
        Priority::from_str(&raw.trim().to_ascii_lowercase()).ok()
    }

    /// Comma-separated list of valid priorities, for error messages.
    pub fn options() -> String {
        Priority::VARIANTS.join(", ")
    }
}

/// A todo item as stored by the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque identifier assigned by the repository.
    pub id: String,
    /// The task description.
    pub text: String,
    pub priority: Priority,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// The shortened identifier shown in console listings.
    pub fn short_id(&self) -> &str {
        let end = self.id.len().min(8);
        &self.id[..end]
    }
}

/// Fields needed to create a task; the repository assigns the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub text: String,
    pub priority: Priority,
}
