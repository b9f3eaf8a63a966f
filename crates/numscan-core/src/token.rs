//! Numeric token scanning.
//!
//! Finds substrings matching `sign? digits (,digits)* (.digits)? suffix?`
//! left to right, taking the longest match at each position. Tokens that
//! start inside a word (`A320`) are rejected, and a trailing letter only
//! counts as a suffix when it is configured and ends the word (`56.7M.` is
//! suffixed, `56.7Mb` is not).

use std::sync::LazyLock;

use regex::Regex;

use crate::suffix::{Suffix, SuffixScale};

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[-+\x{2212}]?[0-9]+(?:,[0-9]+)*(?:\.[0-9]+)?").expect("number pattern is valid")
});

/// A numeric token located in page text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    /// The full matched substring, including sign and suffix.
    pub text: &'a str,
    /// The number portion (sign, digits, separators, fraction).
    pub number: &'a str,
    /// Byte offset of the token within the page text.
    pub start: usize,
    /// Byte offset one past the end of the token.
    pub end: usize,
    /// The recognized suffix and its configured factor.
    pub suffix: Option<(Suffix, f64)>,
}

impl Token<'_> {
    /// The number portion with grouping separators removed and the sign
    /// normalized to ASCII, ready for `f64` parsing.
    pub fn canonical_number(&self) -> String {
        self.number
            .chars()
            .filter(|&c| c != ',')
            .map(|c| if c == '\u{2212}' { '-' } else { c })
            .collect()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_sign(c: char) -> bool {
    matches!(c, '-' | '+' | '\u{2212}')
}

/// Whether a token may begin at byte offset `start`.
fn starts_clean(text: &str, start: usize) -> bool {
    let mut before = text[..start].chars().rev();
    match before.next() {
        None => true,
        Some(c) if is_word_char(c) => false,
        // Leftover of a rejected run such as the ".3" in "1.2.3".
        Some('.' | ',') => !before.next().is_some_and(|c| c.is_ascii_digit()),
        Some(_) => true,
    }
}

/// Scan `text` for numeric tokens, in order of appearance.
pub fn tokenize<'a>(text: &'a str, suffixes: &SuffixScale) -> Vec<Token<'a>> {
    let mut tokens = Vec::new();

    for m in NUMBER_RE.find_iter(text) {
        let mut start = m.start();

        // A sign glued to a word ("2020-2021") is punctuation, not a sign.
        if let Some(first) = m.as_str().chars().next() {
            if is_sign(first) && start > 0 && !starts_clean(text, start) {
                start += first.len_utf8();
            }
        }
        if !starts_clean(text, start) {
            continue;
        }

        let number_end = m.end();
        let mut end = number_end;
        let mut suffix = None;
        let mut rest = text[number_end..].chars();
        if let Some(letter) = rest.next() {
            if let Some(found) = suffixes.lookup(letter) {
                if !rest.next().is_some_and(is_word_char) {
                    suffix = Some(found);
                    end += letter.len_utf8();
                }
            }
        }

        tokens.push(Token {
            text: &text[start..end],
            number: &text[start..number_end],
            start,
            end,
            suffix,
        });
    }

    tokens
}
