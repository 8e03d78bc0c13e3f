//! Note domain: model and repository trait.

pub mod model;
pub mod repository;

pub use model::{NewNote, Note};
pub use repository::NoteRepository;
