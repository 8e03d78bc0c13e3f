//! Collaborator implementations for the Neondeck console.
//!
//! The console core (`neondeck-console`) only knows the traits in
//! `neondeck-core`; this crate supplies the concrete pieces: a file-backed
//! durable state store with atomic writes, plus in-memory repositories and a
//! navigation surface used by the readline front end and by tests.

pub mod memory;
pub mod paths;
pub mod state_repository;
pub mod toml_file;

pub use memory::{
    MemoryCalendarEventRepository, MemoryNavigation, MemoryNoteRepository,
    MemoryStateRepository, MemoryTaskRepository, MemoryTimeEntryRepository,
};
pub use paths::DeckPaths;
pub use state_repository::FileStateRepository;
pub use toml_file::TomlFileStore;
