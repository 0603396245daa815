//! Diagnostics.

use std::fmt::{self, Display, Formatter};

use ecow::EcoString;

/// The result type for the peripheral parsers.
pub type StrResult<T> = Result<T, EcoString>;

/// The result type for typesetting operations.
pub type TypesetResult<T> = Result<T, TypesetError>;

/// An error that occurred while typesetting material.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum TypesetError {
    /// The paragraph optimizer exhausted its active breakpoints before
    /// reaching the end of the list. Not retryable without a configuration
    /// change (a larger tolerance, a different measure, more stretch).
    CannotTypeset,
    /// The upstream mode handed over a mis-ordered node stream. This is a
    /// programming error in the producer, not a typesetting failure.
    MalformedInput(&'static str),
}

impl std::error::Error for TypesetError {}

impl Display for TypesetError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::CannotTypeset => f.pad("no feasible way to break the paragraph"),
            Self::MalformedInput(detail) => write!(f, "malformed input ({detail})"),
        }
    }
}
