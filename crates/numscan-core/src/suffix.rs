//! Magnitude suffixes (`56.7M`, `1.2B`) and their scale factors.

use std::collections::BTreeMap;
use std::fmt;

/// A magnitude suffix letter that may trail a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suffix {
    /// Thousand.
    K,
    /// Million.
    M,
    /// Billion.
    B,
    /// Trillion.
    T,
}

impl Suffix {
    /// All suffixes, smallest first.
    pub const ALL: [Suffix; 4] = [Suffix::K, Suffix::M, Suffix::B, Suffix::T];

    /// Parse a suffix letter, ignoring case.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'K' => Some(Suffix::K),
            'M' => Some(Suffix::M),
            'B' => Some(Suffix::B),
            'T' => Some(Suffix::T),
            _ => None,
        }
    }

    /// Uppercase letter for this suffix.
    pub fn letter(self) -> char {
        match self {
            Suffix::K => 'K',
            Suffix::M => 'M',
            Suffix::B => 'B',
            Suffix::T => 'T',
        }
    }

    /// The conventional multiplier for this suffix.
    pub fn default_factor(self) -> f64 {
        match self {
            Suffix::K => 1e3,
            Suffix::M => 1e6,
            Suffix::B => 1e9,
            Suffix::T => 1e12,
        }
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Mapping from suffix to multiplier.
///
/// Only suffixes present in the mapping are recognized while scanning; a
/// letter that is not configured is treated as ordinary text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SuffixScale {
    factors: BTreeMap<Suffix, f64>,
}

impl SuffixScale {
    /// A mapping with no suffixes: every trailing letter is ignored.
    pub fn none() -> Self {
        Self {
            factors: BTreeMap::new(),
        }
    }

    /// Set (or replace) the factor for a suffix.
    pub fn with(mut self, suffix: Suffix, factor: f64) -> Self {
        self.factors.insert(suffix, factor);
        self
    }

    /// Remove a suffix from the mapping.
    pub fn without(mut self, suffix: Suffix) -> Self {
        self.factors.remove(&suffix);
        self
    }

    /// The configured factor for `suffix`, if recognized.
    pub fn factor(&self, suffix: Suffix) -> Option<f64> {
        self.factors.get(&suffix).copied()
    }

    /// Resolve a trailing letter to a configured suffix and its factor.
    pub fn lookup(&self, c: char) -> Option<(Suffix, f64)> {
        let suffix = Suffix::from_char(c)?;
        self.factor(suffix).map(|f| (suffix, f))
    }

    /// Iterate configured suffixes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (Suffix, f64)> + '_ {
        self.factors.iter().map(|(s, f)| (*s, *f))
    }

    /// Returns true if no suffix is configured.
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

impl Default for SuffixScale {
    fn default() -> Self {
        Self {
            factors: Suffix::ALL
                .iter()
                .map(|s| (*s, s.default_factor()))
                .collect(),
        }
    }
}
