//! Domain models and collaborator traits for the Neondeck console.
//!
//! This crate holds the four record domains the console operates on (tasks,
//! time entries, calendar events, notes), the navigation and durable-state
//! collaborator traits, and the shared error type. The console itself lives
//! in `neondeck-console`; concrete collaborator implementations live in
//! `neondeck-infrastructure`.

pub mod calendar;
pub mod error;
pub mod nav;
pub mod note;
pub mod state;
pub mod task;
pub mod theme;
pub mod timelog;
pub mod timer;

// Re-export common error type
pub use error::{DeckError, Result};
pub use theme::Theme;
pub use timer::ActiveTimer;
