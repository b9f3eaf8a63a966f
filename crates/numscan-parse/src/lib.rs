//! numscan-parse: PDF text extraction backends.
//!
//! Turns PDF bytes into per-page plain text behind the [`PdfBackend`] trait,
//! so the scanner in numscan-core never touches PDF internals.

pub mod backend;
pub mod error;
pub mod lopdf_backend;

pub use backend::PdfBackend;
pub use error::BackendError;
pub use lopdf_backend::{LopdfBackend, LopdfDocument};
pub use numscan_core;
