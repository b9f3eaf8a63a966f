//! Top-N ranking of numeric matches.

use std::cmp::Ordering;

use crate::numeric::NumericMatch;
use crate::options::RankBy;

/// Which value of a match is ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Basis {
    /// The normalized value (suffix and scale applied).
    #[default]
    Scaled,
    /// The number as written, without multipliers.
    Raw,
}

impl Basis {
    /// The value of `m` under this basis.
    pub fn value_of(self, m: &NumericMatch) -> f64 {
        match self {
            Basis::Scaled => m.value,
            Basis::Raw => m.base_value,
        }
    }

    /// Lowercase name used in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Basis::Scaled => "scaled",
            Basis::Raw => "raw",
        }
    }
}

/// Matches sorted best-first, at most `top_n` long.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedResult {
    /// The value that was ranked.
    pub basis: Basis,
    /// The ordering that was used.
    pub rank_by: RankBy,
    /// Ranked matches, best first.
    pub entries: Vec<NumericMatch>,
}

impl RankedResult {
    /// Number of ranked entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was ranked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The ranked value of each entry under this result's basis.
    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|m| self.basis.value_of(m)).collect()
    }

    /// Iterate entries, best first.
    pub fn iter(&self) -> std::slice::Iter<'_, NumericMatch> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a RankedResult {
    type Item = &'a NumericMatch;
    type IntoIter = std::slice::Iter<'a, NumericMatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn sort_key(m: &NumericMatch, basis: Basis, rank_by: RankBy) -> f64 {
    let v = basis.value_of(m);
    match rank_by {
        RankBy::Value => v,
        RankBy::Magnitude => v.abs(),
    }
}

/// Order two matches best-first: larger key, then earlier page, then
/// earlier position on the page.
fn compare(a: &NumericMatch, b: &NumericMatch, basis: Basis, rank_by: RankBy) -> Ordering {
    sort_key(b, basis, rank_by)
        .total_cmp(&sort_key(a, basis, rank_by))
        .then(a.page_number.cmp(&b.page_number))
        .then(a.offset.cmp(&b.offset))
}

/// Rank `matches` and keep the best `top_n`.
pub fn rank(
    mut matches: Vec<NumericMatch>,
    top_n: usize,
    basis: Basis,
    rank_by: RankBy,
) -> RankedResult {
    matches.sort_by(|a, b| compare(a, b, basis, rank_by));
    matches.truncate(top_n);
    RankedResult {
        basis,
        rank_by,
        entries: matches,
    }
}
