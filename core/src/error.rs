//! Error types shared by every todo store and by the HTTP layer.
//!
//! # Design
//! Input problems and storage problems are separate types: a `ValidationError`
//! is raised before a store is touched, while a `StoreError` only ever comes
//! out of a `TodoStore`. "Not found" is neither; stores report absence as
//! `None` or `false` and the caller decides what that means.

use thiserror::Error;

/// Request input that cannot be applied to a todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("No update fields provided")]
    NoUpdateFields,
}

/// The backing store failed to run a statement or decode its result.
#[derive(Debug, Error)]
#[error("store error: {message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
