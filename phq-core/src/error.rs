//! Error types for textual input.
//!
//! Dimensional mistakes are compile errors and numerical anomalies propagate as IEEE-754 values, so
//! the only runtime failures in this crate come from reading text: an unknown unit abbreviation or
//! a malformed document.

/// Result type for parsing quantities from text.
pub type ParseResult<T> = Result<T, ParseError>;

/// An abbreviation that names no unit of the requested family.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {family} abbreviation: {text:?}")]
pub struct UnitParseError {
    /// Name of the unit family that was searched.
    pub family: &'static str,
    /// The offending text.
    pub text: String,
}

impl UnitParseError {
    /// Creates an error for `text` not matching any unit of `family`.
    pub fn new(family: &'static str, text: &str) -> Self {
        Self {
            family,
            text: text.to_string(),
        }
    }
}

/// Error type for reading a quantity from a structured document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The document is not well formed or does not have the expected shape.
    #[error("syntax error at line {line}, column {column}: {message}")]
    Syntax {
        /// One-based line of the offending input.
        line: usize,
        /// One-based column of the offending input.
        column: usize,
        /// Description of the problem.
        message: String,
    },

    /// The document names a unit that does not belong to the quantity's family.
    #[error(transparent)]
    Unit(#[from] UnitParseError),
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::Syntax {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}
