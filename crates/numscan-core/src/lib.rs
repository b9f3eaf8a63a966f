//! numscan-core: Backend-independent numeric token extraction and ranking.
//!
//! Scans page text for numbers (`1,234.5`, `-12.50`, `56.7M`), normalizes
//! them by suffix and page scale, and ranks the results. PDF reading lives
//! in numscan-parse; this crate only sees `(page number, text)` pairs.

pub mod error;
pub mod numeric;
pub mod options;
pub mod rank;
pub mod scale;
pub mod scan;
pub mod suffix;
pub mod token;

pub use error::{ScanError, ScanResult, ScanWarning, ScanWarningCode};
pub use numeric::{NumericMatch, normalize};
pub use options::{RankBy, ScanOptions, top_n_from_arg};
pub use rank::{Basis, RankedResult, rank};
pub use scale::detect_page_scale;
pub use scan::{PageText, find_top_raw_values, find_top_values, scan_page, scan_pages};
pub use suffix::{Suffix, SuffixScale};
pub use token::{Token, tokenize};
