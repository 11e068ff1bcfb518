//! Store error types for deal-store.

use deal_core::enums::Stage;
use deal_core::errors::CoreError;
use deal_core::ids::VentureId;
use thiserror::Error;

/// Errors from pipeline store operations.
///
/// Every variant is recoverable: the store is unchanged when one is returned.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No venture with that id.
    #[error("Venture not found: {id}")]
    NotFound { id: VentureId },

    /// The stage graph does not allow `from -> to`.
    #[error("Invalid transition for venture {id}: {from} -> {to}")]
    InvalidTransition {
        id: VentureId,
        from: Stage,
        to: Stage,
    },

    /// The venture changed since the caller last read it.
    #[error("Version conflict for venture {id}: expected {expected}, found {actual}")]
    VersionConflict {
        id: VentureId,
        expected: u64,
        actual: u64,
    },

    /// Input failed validation (blank fields, duplicate ids, bad money).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors (I/O, malformed seed files).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoreError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    #[must_use]
    pub const fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }
}

impl From<CoreError> for StoreError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(message) => Self::Validation(message),
            other @ CoreError::InvalidTransition { .. } => Self::Other(other.into()),
        }
    }
}
