//! Error handling for CertKit
//!
//! Failures in the template engine fall into three classes:
//! - Validation errors: a pre-condition was not met and nothing was mutated
//! - Service errors: an external collaborator (persistence, upload, export)
//!   failed and the engine state was left exactly as it was
//! - Silent no-ops: stale ids, undo at the start of history, empty selections.
//!   These are not errors at all and never produce a value of these types.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Pre-condition failure, raised before any mutation happens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A template cannot be saved without a name
    #[error("Template name must not be empty")]
    EmptyName,

    /// An operation was invoked with too few selected elements
    #[error("{operation} requires at least {required} selected elements, got {actual}")]
    InsufficientSelection {
        /// The operation that was rejected.
        operation: String,
        /// The minimum number of elements the operation needs.
        required: usize,
        /// The number of elements that were actually selected.
        actual: usize,
    },

    /// An export was requested for zero records
    #[error("Export requires at least one record")]
    EmptyRecordList,

    /// The template has never been persisted, so it has no id to reference
    #[error("Template must be saved before it can be exported")]
    UnsavedTemplate,

    /// Geometry that can never be committed (for example zero width)
    #[error("Invalid geometry: {reason}")]
    InvalidGeometry {
        /// Why the geometry was rejected.
        reason: String,
    },
}

/// Failure reported by an external collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Loading or saving a template failed
    #[error("Persistence failed: {reason}")]
    Persistence {
        /// The reason reported by the store.
        reason: String,
    },

    /// Uploading an asset failed
    #[error("Upload of '{file_name}' failed: {reason}")]
    Upload {
        /// The name of the file that was being uploaded.
        file_name: String,
        /// The reason reported by the upload service.
        reason: String,
    },

    /// The export service rejected or failed the request
    #[error("Export failed: {reason}")]
    Export {
        /// The reason reported by the export service.
        reason: String,
    },

    /// A referenced template does not exist
    #[error("Template {id} not found")]
    NotFound {
        /// The id that was looked up.
        id: String,
    },

    /// The pending operation was cancelled before it completed
    #[error("Operation cancelled")]
    Cancelled,
}

/// Main error type for CertKit
///
/// A unified error type that can represent any failure surfaced by the
/// engine. Every variant is retryable at the call site.
#[derive(Error, Debug)]
pub enum Error {
    /// Validation error
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// External service error
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// JSON encoding or decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Shorthand for an [`ValidationError::InsufficientSelection`] error.
    pub fn insufficient_selection(
        operation: impl Into<String>,
        required: usize,
        actual: usize,
    ) -> Self {
        Error::Validation(ValidationError::InsufficientSelection {
            operation: operation.into(),
            required,
            actual,
        })
    }

    /// Check if this is a pre-condition failure
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Check if this failure came from an external collaborator
    pub fn is_service(&self) -> bool {
        matches!(self, Error::Service(_))
    }

    /// Check if the operation was cancelled
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Service(ServiceError::Cancelled))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
