//! # Framework Errors
//!
//! Common error type shared by every resource actor and client. Entity-specific failures
//! travel boxed inside [`FrameworkError::EntityError`] so the typed client wrapper can
//! downcast them back to the entity's own error enum.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    /// Two seed entities share an id.
    #[error("Duplicate id in seed: {0}")]
    DuplicateId(String),
    /// Every id up to `u64::MAX` has been assigned.
    #[error("Id space exhausted")]
    IdSpaceExhausted,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
