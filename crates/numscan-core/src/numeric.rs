//! Normalized numeric matches.

use crate::error::ScanError;
use crate::suffix::Suffix;
use crate::token::Token;

/// A numeric token with its fully normalized value.
///
/// `value` has the suffix and page-scale multipliers applied; `raw_text`
/// keeps the substring exactly as it appeared on the page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumericMatch {
    /// The matched substring, including sign and suffix.
    pub raw_text: String,
    /// Normalized value (suffix and scale applied).
    pub value: f64,
    /// The signed number before any multiplier.
    pub base_value: f64,
    /// 1-based page number.
    pub page_number: u32,
    /// Byte offset of the token within the page text.
    pub offset: usize,
    /// Suffix that contributed to `value`, if any.
    pub suffix_applied: Option<Suffix>,
    /// Page-level multiplier that contributed to `value`, if any.
    pub scale_applied: Option<f64>,
}

/// Convert a token into a [`NumericMatch`].
///
/// `page_scale` is the page multiplier to apply to this token, already
/// resolved by the caller.
///
/// # Errors
///
/// Returns [`ScanError::ParseError`] if the number or the scaled result is
/// not a finite `f64` (e.g. a 400-digit integer).
pub fn normalize(
    token: &Token<'_>,
    page_number: u32,
    page_scale: Option<f64>,
) -> Result<NumericMatch, ScanError> {
    let parse_error = |reason: &str| ScanError::ParseError {
        raw_text: token.text.to_string(),
        page_number,
        reason: reason.to_string(),
    };

    let canonical = token.canonical_number();
    let base_value: f64 = canonical
        .parse()
        .map_err(|_| parse_error("not a decimal number"))?;
    if !base_value.is_finite() {
        return Err(parse_error("number exceeds the representable range"));
    }

    let mut value = base_value;
    if let Some((_, factor)) = token.suffix {
        value *= factor;
    }
    if let Some(scale) = page_scale {
        value *= scale;
    }
    if !value.is_finite() {
        return Err(parse_error("scaled value exceeds the representable range"));
    }

    Ok(NumericMatch {
        raw_text: token.text.to_string(),
        // -0.0 and 0.0 rank as equals
        value: value + 0.0,
        base_value: base_value + 0.0,
        page_number,
        offset: token.start,
        suffix_applied: token.suffix.map(|(s, _)| s),
        scale_applied: page_scale,
    })
}
