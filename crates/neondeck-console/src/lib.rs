//! The Neondeck command console.
//!
//! A line-oriented interpreter over four record domains (tasks, time
//! entries, calendar events, notes) plus navigation and session commands.
//! Raw lines flow through the argument parser into the dispatcher, which
//! routes to a handler per command; each execution terminates in at most one
//! transcript entry and never panics the console.

pub mod args;
pub mod catalog;
pub mod console;
pub mod handlers;
pub mod session;
pub mod transcript;

pub use console::{CommandOutput, Console};
pub use session::ConsoleSession;
pub use transcript::{EntryKind, TranscriptEntry};
