//! In-memory collaborator implementations.
//!
//! These back the readline front end's offline mode and double as fixtures
//! for console tests. Records live in insertion order behind async locks;
//! identifiers are v4 UUIDs and may be referenced by any unambiguous
//! prefix, matching the shortened ids the console displays.

pub mod navigation;
pub mod records;
pub mod state;

pub use navigation::MemoryNavigation;
pub use records::{
    MemoryCalendarEventRepository, MemoryNoteRepository, MemoryTaskRepository,
    MemoryTimeEntryRepository,
};
pub use state::MemoryStateRepository;
