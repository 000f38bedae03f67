//! Error types for the docweave library.

use std::io;
use thiserror::Error;

/// Result type alias for docweave operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while parsing or rendering documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input text violates the structural rules of the document model.
    #[error("format error at line {line}: {message}")]
    Format {
        /// 1-based line number of the offending line.
        line: usize,
        /// Description of the violation.
        message: String,
    },

    /// The input exceeds the configured size ceiling.
    #[error("input is {size} bytes, exceeding the {limit} byte limit")]
    InputTooLarge {
        /// Actual input size in bytes.
        size: usize,
        /// Configured ceiling in bytes.
        limit: usize,
    },

    /// Error during rendering (HTML, text, JSON).
    #[error("rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Create a format error at the given 1-based line number.
    pub fn format(line: usize, message: impl Into<String>) -> Self {
        Error::Format {
            line,
            message: message.into(),
        }
    }

    /// Get the offending line number if this is a format error.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Format { line, .. } => Some(*line),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::format(7, "table row has 3 columns, expected 2");
        assert_eq!(
            err.to_string(),
            "format error at line 7: table row has 3 columns, expected 2"
        );

        let err = Error::InputTooLarge {
            size: 2048,
            limit: 1024,
        };
        assert_eq!(
            err.to_string(),
            "input is 2048 bytes, exceeding the 1024 byte limit"
        );
    }

    #[test]
    fn test_format_error_line() {
        let err = Error::format(3, "bad heading");
        assert_eq!(err.line(), Some(3));

        let err = Error::Render("oops".to_string());
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
