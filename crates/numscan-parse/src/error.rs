//! Error types for the text-extraction layer.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Every [`BackendError`]
//! is an input problem from the scanner's point of view and converts into
//! [`ScanError::InputError`] unless it already wraps a core error.

use numscan_core::ScanError;
use thiserror::Error;

/// Error type for PDF backend operations.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Error from PDF parsing (structure, syntax, object resolution).
    #[error("PDF parse error: {0}")]
    Parse(String),

    /// Error reading PDF data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is encrypted and no password was supplied.
    #[error("PDF is encrypted and requires a password")]
    PasswordRequired,

    /// The supplied password does not decrypt the document.
    #[error("the supplied password is incorrect")]
    InvalidPassword,

    /// Text could not be extracted from a page.
    #[error("failed to extract text from page {page}: {message}")]
    Text {
        /// 1-based page number.
        page: u32,
        /// Backend message.
        message: String,
    },

    /// A core library error.
    #[error(transparent)]
    Core(#[from] ScanError),
}

impl From<BackendError> for ScanError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Core(e) => e,
            other => ScanError::InputError(other.to_string()),
        }
    }
}
