//! Durable console state: model and repository trait.

pub mod model;
pub mod repository;

pub use model::DeckState;
pub use repository::StateRepository;
