//! Page-level scale detection.
//!
//! Financial statements often print figures without a suffix and state the
//! unit once per page ("in millions", "(thousands)"). The last such phrase
//! on a page decides the multiplier for that page.

use std::sync::LazyLock;

use regex::Regex;

static SCALE_PHRASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\bin\s+|\()(thousand|million|billion|trillion)s?\b")
        .expect("scale phrase pattern is valid")
});

fn keyword_factor(word: &str) -> Option<f64> {
    match word.to_ascii_lowercase().as_str() {
        "thousand" => Some(1e3),
        "million" => Some(1e6),
        "billion" => Some(1e9),
        "trillion" => Some(1e12),
        _ => None,
    }
}

/// Detect the page scale announced by a phrase like "in millions".
///
/// Returns the factor of the phrase that appears last in `text`, or `None`
/// if the page states no scale.
pub fn detect_page_scale(text: &str) -> Option<f64> {
    SCALE_PHRASE_RE
        .captures_iter(text)
        .last()
        .and_then(|caps| caps.get(1))
        .and_then(|word| keyword_factor(word.as_str()))
}
