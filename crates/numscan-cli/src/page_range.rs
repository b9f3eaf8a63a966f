//! Page arguments: range selections like "1,3-5" and scale overrides like "3=1000".

/// A parsed, not yet bounds-checked page selection (1-indexed, inclusive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSelection {
    ranges: Vec<(usize, usize)>,
}

impl PageSelection {
    /// Parse a selection string without knowing the document's page count.
    ///
    /// Returns an error for page 0, malformed numbers, or reversed ranges.
    pub fn parse(input: &str) -> Result<Self, String> {
        let mut ranges = Vec::new();

        for part in input.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }

            let (start, end) = match part.split_once('-') {
                Some((start, end)) => (parse_page(start)?, parse_page(end)?),
                None => {
                    let page = parse_page(part)?;
                    (page, page)
                }
            };
            if start > end {
                return Err(format!("invalid page range '{part}' (start exceeds end)"));
            }
            ranges.push((start, end));
        }

        if ranges.is_empty() {
            return Err(format!("no pages selected by '{input}'"));
        }
        Ok(Self { ranges })
    }

    /// Resolve against a document into sorted, deduplicated 0-indexed pages.
    pub fn resolve(&self, page_count: usize) -> Result<Vec<usize>, String> {
        let mut pages = Vec::new();
        for &(start, end) in &self.ranges {
            if end > page_count {
                return Err(format!(
                    "page {end} exceeds document page count ({page_count})"
                ));
            }
            pages.extend((start..=end).map(|p| p - 1));
        }
        pages.sort_unstable();
        pages.dedup();
        Ok(pages)
    }
}

fn parse_page(s: &str) -> Result<usize, String> {
    let s = s.trim();
    let page: usize = s
        .parse()
        .map_err(|_| format!("invalid page number: '{s}'"))?;
    if page == 0 {
        return Err("page 0 is invalid (pages start at 1)".to_string());
    }
    Ok(page)
}

/// Parse a `PAGE=FACTOR` page scale override.
///
/// Only the syntax is checked here; factor positivity is checked together
/// with the rest of the scan options.
pub fn parse_page_scale(input: &str) -> Result<(u32, f64), String> {
    let (page, factor) = input
        .split_once('=')
        .ok_or_else(|| format!("expected PAGE=FACTOR, got '{input}'"))?;
    let page: u32 = page
        .trim()
        .parse()
        .map_err(|_| format!("invalid page number: '{}'", page.trim()))?;
    let factor: f64 = factor
        .trim()
        .parse()
        .map_err(|_| format!("invalid scale factor: '{}'", factor.trim()))?;
    Ok((page, factor))
}
