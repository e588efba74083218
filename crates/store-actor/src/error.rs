//! # Store Errors
//!
//! Common error type shared by every store actor and client.

/// Errors that can occur within the store engine itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("No ids left to assign")]
    IdsExhausted,
}
