//! Command handlers, one module per family.

pub mod calendar;
pub mod nav;
pub mod note;
pub mod system;
pub mod timelog;
pub mod todo;

use neondeck_core::error::DeckError;

/// Converts a collaborator failure into the remote error classification.
///
/// The collaborator's own message is kept verbatim; only the classification
/// changes so the renderer can prefix it distinctly from parse errors.
pub(crate) fn remote<E: std::fmt::Display>(err: E) -> DeckError {
    DeckError::remote(err.to_string())
}
