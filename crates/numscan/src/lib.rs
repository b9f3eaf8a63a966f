//! numscan: Find the largest numbers in a PDF document.
//!
//! This is the public API facade crate. It re-exports types from
//! numscan-core and uses numscan-parse for reading page text.
//!
//! # Architecture
//!
//! - **numscan-core**: Tokenizing, normalizing, and ranking numbers in text
//! - **numscan-parse**: PDF page text extraction backends
//! - **numscan** (this crate): Public API that ties everything together
//!
//! # Example
//!
//! ```ignore
//! use numscan::{Pdf, ScanOptions};
//!
//! let pdf = Pdf::open_file("report.pdf")?;
//! let top = pdf.find_top_values(&ScanOptions::with_top(5))?;
//! for m in &top.value {
//!     println!("{} (page {})", m.raw_text, m.page_number);
//! }
//! ```

mod pdf;

pub use numscan_core;
pub use numscan_parse;

pub use numscan_core::{
    Basis, NumericMatch, PageText, RankBy, RankedResult, ScanError, ScanOptions, ScanResult,
    ScanWarning, ScanWarningCode, Suffix, SuffixScale, find_top_raw_values, find_top_values,
    rank, scan_pages, top_n_from_arg,
};
#[cfg(feature = "std")]
pub use pdf::extract_pages;
pub use pdf::{PagesIter, Pdf};
