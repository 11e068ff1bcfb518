//! Cross-cutting error types for Dealflow.
//!
//! Errors raised by the domain types themselves. The store defines its own
//! `StoreError` with typed venture ids; the CLI converges everything into
//! `anyhow`.

use thiserror::Error;

/// Errors that can be raised by `deal-core` types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// Data failed validation (format, required fields, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
