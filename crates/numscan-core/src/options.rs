//! Options controlling a numeric scan.

use std::collections::BTreeMap;

use crate::error::ScanError;
use crate::suffix::SuffixScale;

/// Ordering used when ranking matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RankBy {
    /// Signed value: `-5` ranks below `1`.
    #[default]
    Value,
    /// Absolute value: `-5` ranks above `1`.
    Magnitude,
}

/// Options for scanning and ranking numeric tokens.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanOptions {
    /// How many ranked results to keep (default: 10). Must be positive.
    pub top_n: usize,
    /// Recognized magnitude suffixes (default: K, M, B, T).
    pub suffixes: SuffixScale,
    /// Explicit per-page multipliers keyed by 1-based page number.
    pub page_scales: BTreeMap<u32, f64>,
    /// Detect phrases like "in millions" and scale unsuffixed numbers on that
    /// page (default: `false`). Explicit `page_scales` entries take precedence.
    pub detect_page_scale: bool,
    /// Ranking order (default: signed value).
    pub rank_by: RankBy,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            top_n: 10,
            suffixes: SuffixScale::default(),
            page_scales: BTreeMap::new(),
            detect_page_scale: false,
            rank_by: RankBy::Value,
        }
    }
}

impl ScanOptions {
    /// Default options keeping the top `top_n` results.
    pub fn with_top(top_n: usize) -> Self {
        Self {
            top_n,
            ..Self::default()
        }
    }

    /// Add an explicit scale multiplier for a page.
    pub fn page_scale(mut self, page_number: u32, factor: f64) -> Self {
        self.page_scales.insert(page_number, factor);
        self
    }

    /// Check the options before any extraction work starts.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::ConfigError`] for a zero `top_n`, a page number of
    /// zero, or a suffix factor or page scale that is not finite and positive.
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.top_n == 0 {
            return Err(ScanError::config("top must be a positive integer"));
        }
        for (suffix, factor) in self.suffixes.iter() {
            if !factor.is_finite() || factor <= 0.0 {
                return Err(ScanError::config(format!(
                    "scale for suffix {suffix} must be finite and positive, got {factor}"
                )));
            }
        }
        for (&page, &factor) in &self.page_scales {
            if page == 0 {
                return Err(ScanError::config(
                    "page 0 is invalid in page scale (pages start at 1)",
                ));
            }
            if !factor.is_finite() || factor <= 0.0 {
                return Err(ScanError::config(format!(
                    "scale for page {page} must be finite and positive, got {factor}"
                )));
            }
        }
        Ok(())
    }
}

/// Convert a signed top-N argument into a count.
///
/// # Errors
///
/// Returns [`ScanError::ConfigError`] when `n <= 0`.
pub fn top_n_from_arg(n: i64) -> Result<usize, ScanError> {
    if n <= 0 {
        return Err(ScanError::config(format!(
            "top must be a positive integer, got {n}"
        )));
    }
    usize::try_from(n).map_err(|_| ScanError::config(format!("top value {n} is too large")))
}
