//! Boundary errors for the extraction layer.
//!
//! Only input-boundary failures surface as errors; anything that goes wrong
//! inside a page, sheet, or row degrades to an
//! [`ExtractWarning`](docjoin_core::ExtractWarning) and missing content.

use thiserror::Error;

/// Error raised at the input boundary, before extraction is attempted.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The input format could not be recognized from its name or bytes.
    #[error("unsupported input format: {0}")]
    UnsupportedFormat(String),

    /// Error reading input data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_format_display() {
        let err = ExtractError::UnsupportedFormat("archive.tar".to_string());
        assert_eq!(err.to_string(), "unsupported input format: archive.tar");
    }

    #[test]
    fn io_error_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
        let err: ExtractError = io_err.into();
        assert!(matches!(err, ExtractError::Io(_)));
        assert!(err.to_string().contains("missing file"));
    }
}
