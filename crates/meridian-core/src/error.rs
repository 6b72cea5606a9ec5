//! Error types for identifier handling.

use thiserror::Error;

/// Errors that can occur while parsing an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    /// The input is not a decimal integer.
    #[error("not a decimal integer: {0:?}")]
    NotNumeric(String),

    /// The input is an integer that no record can ever be assigned.
    ///
    /// Identifiers start at 1, so zero and negative values land here.
    #[error("identifier out of range: {0}")]
    OutOfRange(i128),
}

impl IdError {
    /// Whether the input was a well-formed integer that simply cannot name a record.
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange(_))
    }
}
