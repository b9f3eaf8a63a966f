//! Error and warning types for numscan.
//!
//! Provides [`ScanError`] for fatal errors and locally recovered token
//! failures, [`ScanWarning`] for non-fatal issues that allow the scan to
//! continue, and [`ScanResult`] for pairing a value with collected warnings.

use std::fmt;

/// Error types for numeric scanning.
///
/// [`InputError`](ScanError::InputError) and [`ConfigError`](ScanError::ConfigError)
/// terminate a run. [`ParseError`](ScanError::ParseError) is produced for a
/// single token and is recovered by the scanner, which records a
/// [`ScanWarning`] and moves on.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanError {
    /// The document could not be read (missing, unreadable, corrupt, encrypted).
    InputError(String),
    /// The run configuration is invalid (e.g. a top-N of zero).
    ConfigError(String),
    /// A token matched the number grammar but has no finite value.
    ParseError {
        /// The token as it appeared in the page text.
        raw_text: String,
        /// 1-based page number the token was found on.
        page_number: u32,
        /// Why the token could not be normalized.
        reason: String,
    },
}

impl ScanError {
    /// Shorthand for a [`ScanError::ConfigError`].
    pub fn config(msg: impl Into<String>) -> Self {
        ScanError::ConfigError(msg.into())
    }

    /// Shorthand for a [`ScanError::InputError`].
    pub fn input(msg: impl Into<String>) -> Self {
        ScanError::InputError(msg.into())
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::InputError(msg) => write!(f, "input error: {msg}"),
            ScanError::ConfigError(msg) => write!(f, "config error: {msg}"),
            ScanError::ParseError {
                raw_text,
                page_number,
                reason,
            } => write!(
                f,
                "parse error: cannot normalize '{raw_text}' on page {page_number}: {reason}"
            ),
        }
    }
}

impl std::error::Error for ScanError {}

impl From<std::io::Error> for ScanError {
    fn from(err: std::io::Error) -> Self {
        ScanError::InputError(err.to_string())
    }
}

/// Machine-readable warning code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScanWarningCode {
    /// A numeric token was skipped because its value is not finite.
    UnrepresentableNumber,
    /// A page produced no extractable text.
    EmptyPage,
}

impl ScanWarningCode {
    /// Returns the string tag for this warning code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanWarningCode::UnrepresentableNumber => "UNREPRESENTABLE_NUMBER",
            ScanWarningCode::EmptyPage => "EMPTY_PAGE",
        }
    }
}

impl fmt::Display for ScanWarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal issue encountered while scanning.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanWarning {
    /// Machine-readable warning code.
    pub code: ScanWarningCode,
    /// Human-readable description.
    pub description: String,
    /// 1-based page number, if the warning is tied to a page.
    pub page: Option<u32>,
    /// The offending token, if any.
    pub raw_text: Option<String>,
}

impl ScanWarning {
    /// Warning for a page without extractable text.
    pub fn empty_page(page: u32) -> Self {
        Self {
            code: ScanWarningCode::EmptyPage,
            description: "page has no extractable text".to_string(),
            page: Some(page),
            raw_text: None,
        }
    }

    /// Convert a recovered [`ScanError::ParseError`] into a warning.
    ///
    /// Other error kinds are fatal and never become warnings; they are
    /// described without token context.
    pub fn from_error(err: &ScanError) -> Self {
        match err {
            ScanError::ParseError {
                raw_text,
                page_number,
                reason,
            } => Self {
                code: ScanWarningCode::UnrepresentableNumber,
                description: reason.clone(),
                page: Some(*page_number),
                raw_text: Some(raw_text.clone()),
            },
            other => Self {
                code: ScanWarningCode::UnrepresentableNumber,
                description: other.to_string(),
                page: None,
                raw_text: None,
            },
        }
    }
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.description)?;
        if let Some(page) = self.page {
            write!(f, " (page {page})")?;
        }
        if let Some(ref raw) = self.raw_text {
            write!(f, " [{raw}]")?;
        }
        Ok(())
    }
}

/// Result wrapper that pairs a value with collected warnings.
#[derive(Debug, Clone)]
pub struct ScanResult<T> {
    /// The produced value.
    pub value: T,
    /// Warnings collected while producing it.
    pub warnings: Vec<ScanWarning>,
}

impl<T> ScanResult<T> {
    /// Create a result with no warnings.
    pub fn ok(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    /// Create a result with warnings.
    pub fn with_warnings(value: T, warnings: Vec<ScanWarning>) -> Self {
        Self { value, warnings }
    }

    /// Returns true if there are no warnings.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Transform the value while preserving warnings.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ScanResult<U> {
        ScanResult {
            value: f(self.value),
            warnings: self.warnings,
        }
    }
}
