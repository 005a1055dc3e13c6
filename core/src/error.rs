//! Errors raised by `TodoStore`.
//!
//! # Design
//! The store has exactly one failure mode: an update names a title that no
//! item carries. The message quotes the requested title so the HTTP layer
//! can pass it straight through as the response detail.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No item carries the requested title.
    #[error("TODO '{title}' not found.")]
    NotFound { title: String },
}

impl StoreError {
    pub fn not_found(title: impl Into<String>) -> Self {
        StoreError::NotFound {
            title: title.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
