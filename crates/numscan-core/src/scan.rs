//! The scan pass: page text in, normalized matches out.

use crate::error::{ScanError, ScanResult, ScanWarning};
use crate::numeric::{NumericMatch, normalize};
use crate::options::ScanOptions;
use crate::rank::{Basis, RankedResult, rank};
use crate::scale::detect_page_scale;
use crate::token::tokenize;

/// Plain text of one page, as produced by a text-extraction backend.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageText {
    /// 1-based page number.
    pub page_number: u32,
    /// Extracted text.
    pub text: String,
}

impl PageText {
    /// Create a page.
    pub fn new(page_number: u32, text: impl Into<String>) -> Self {
        Self {
            page_number,
            text: text.into(),
        }
    }
}

/// Scan a single page.
///
/// An explicit page scale from `options.page_scales` applies to every token
/// on the page. Otherwise, when `detect_page_scale` is set, a scale phrase
/// found on the page applies to tokens without a suffix. Tokens whose value
/// is not finite are skipped and reported as warnings.
pub fn scan_page(
    page_number: u32,
    text: &str,
    options: &ScanOptions,
) -> ScanResult<Vec<NumericMatch>> {
    if text.trim().is_empty() {
        tracing::debug!(page = page_number, "page has no text");
        return ScanResult::with_warnings(
            Vec::new(),
            vec![ScanWarning::empty_page(page_number)],
        );
    }

    let explicit = options.page_scales.get(&page_number).copied();
    let detected = match explicit {
        None if options.detect_page_scale => detect_page_scale(text),
        _ => None,
    };
    if let Some(factor) = detected {
        tracing::debug!(page = page_number, factor, "detected page scale");
    }

    let mut matches = Vec::new();
    let mut warnings = Vec::new();

    for token in tokenize(text, &options.suffixes) {
        let scale = match (explicit, detected) {
            (Some(s), _) => Some(s),
            (None, Some(d)) if token.suffix.is_none() => Some(d),
            _ => None,
        };
        match normalize(&token, page_number, scale) {
            Ok(m) => matches.push(m),
            Err(err) => {
                tracing::warn!(page = page_number, token = token.text, "skipping token: {err}");
                warnings.push(ScanWarning::from_error(&err));
            }
        }
    }

    tracing::debug!(page = page_number, matches = matches.len(), "scanned page");
    ScanResult::with_warnings(matches, warnings)
}

/// Scan every page, accumulating matches in page order.
///
/// # Errors
///
/// Returns [`ScanError::ConfigError`] if `options` fail validation; no page
/// is scanned in that case.
pub fn scan_pages<'a, I>(
    pages: I,
    options: &ScanOptions,
) -> Result<ScanResult<Vec<NumericMatch>>, ScanError>
where
    I: IntoIterator<Item = &'a PageText>,
{
    options.validate()?;

    let mut all = Vec::new();
    let mut warnings = Vec::new();
    for page in pages {
        let result = scan_page(page.page_number, &page.text, options);
        all.extend(result.value);
        warnings.extend(result.warnings);
    }
    Ok(ScanResult::with_warnings(all, warnings))
}

/// Scan `pages` and return the top `options.top_n` normalized values.
///
/// # Errors
///
/// Returns [`ScanError::ConfigError`] if `options` fail validation.
pub fn find_top_values<'a, I>(
    pages: I,
    options: &ScanOptions,
) -> Result<ScanResult<RankedResult>, ScanError>
where
    I: IntoIterator<Item = &'a PageText>,
{
    let scanned = scan_pages(pages, options)?;
    Ok(scanned.map(|matches| rank(matches, options.top_n, Basis::Scaled, options.rank_by)))
}

/// Scan `pages` and return the top `options.top_n` numbers as written,
/// ignoring suffix and page multipliers.
///
/// # Errors
///
/// Returns [`ScanError::ConfigError`] if `options` fail validation.
pub fn find_top_raw_values<'a, I>(
    pages: I,
    options: &ScanOptions,
) -> Result<ScanResult<RankedResult>, ScanError>
where
    I: IntoIterator<Item = &'a PageText>,
{
    let scanned = scan_pages(pages, options)?;
    Ok(scanned.map(|matches| rank(matches, options.top_n, Basis::Raw, options.rank_by)))
}
