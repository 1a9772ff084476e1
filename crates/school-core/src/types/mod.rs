//! # Shared Error Types
//!
//! `SchoolRecord` never fails, so the only producers of `RecordError` are
//! `Motorcycle::new` and the JSON rendering path of the binary.

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised while building or rendering records.
///
/// - No silent failures
/// - Use `Result<T, RecordError>` for fallible operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// A required field was empty after trimming whitespace.
    #[error("{field} cannot be empty")]
    EmptyField {
        /// Human-readable name of the offending field.
        field: &'static str,
    },

    /// A record could not be serialized for output.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

// =============================================================================
// TESTS
// =============================================================================
