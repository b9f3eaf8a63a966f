//! PDF text backend trait.
//!
//! Defines the [`PdfBackend`] trait that abstracts the one thing the scanner
//! needs from a PDF library: the plain text of each page.

use numscan_core::ScanError;

/// Trait abstracting page text extraction.
///
/// # Usage
///
/// ```ignore
/// let doc = MyBackend::open(pdf_bytes)?;
/// for index in 0..MyBackend::page_count(&doc) {
///     let text = MyBackend::page_text(&doc, index)?;
/// }
/// ```
pub trait PdfBackend {
    /// The parsed PDF document type.
    type Document;

    /// Backend-specific error type, convertible to [`ScanError`].
    type Error: std::error::Error + Into<ScanError>;

    /// Parse PDF bytes into a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a valid PDF or the document is
    /// encrypted.
    fn open(bytes: &[u8]) -> Result<Self::Document, Self::Error>;

    /// Parse and decrypt PDF bytes. The password is ignored for documents
    /// that are not encrypted.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a valid PDF or the password is
    /// wrong.
    fn open_with_password(bytes: &[u8], password: &str) -> Result<Self::Document, Self::Error>;

    /// Return the number of pages in the document.
    fn page_count(doc: &Self::Document) -> usize;

    /// Extract the plain text of the page at a 0-based index.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range or the page content
    /// cannot be decoded.
    fn page_text(doc: &Self::Document, index: usize) -> Result<String, Self::Error>;
}
