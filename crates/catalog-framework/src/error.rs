//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself. Rejections coming from an entity
//! hook travel as [`FrameworkError::Rejected`] and keep their full [`InputError`].

use crate::input_error::InputError;

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Rejected: {0}")]
    Rejected(#[from] InputError),
}
