//! Top-level PDF document type for reading page text and scanning numbers.

use numscan_core::{
    Basis, NumericMatch, PageText, RankedResult, ScanError, ScanOptions, ScanResult, rank,
    scan_pages,
};
use numscan_parse::{LopdfBackend, LopdfDocument, PdfBackend};

/// Iterator over the pages of a PDF, yielding each page's text on demand.
///
/// Created by [`Pdf::pages_iter()`].
pub struct PagesIter<'a> {
    pdf: &'a Pdf,
    current: usize,
    count: usize,
}

impl Iterator for PagesIter<'_> {
    type Item = Result<PageText, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.count {
            return None;
        }
        let result = self.pdf.page_text(self.current);
        self.current += 1;
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.current;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PagesIter<'_> {}

/// A PDF document opened for scanning.
///
/// # Example
///
/// ```ignore
/// let pdf = Pdf::open(&bytes)?;
/// let top = pdf.find_top_values(&ScanOptions::with_top(3))?;
/// ```
pub struct Pdf {
    doc: LopdfDocument,
}

impl std::fmt::Debug for Pdf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pdf")
            .field("page_count", &self.page_count())
            .finish_non_exhaustive()
    }
}

/// Prefix an input error with the path it came from.
#[cfg(feature = "std")]
fn with_path(err: ScanError, path: &std::path::Path) -> ScanError {
    match err {
        ScanError::InputError(msg) => ScanError::InputError(format!("{}: {msg}", path.display())),
        other => other,
    }
}

#[cfg(feature = "std")]
fn read_file(path: &std::path::Path) -> Result<Vec<u8>, ScanError> {
    std::fs::read(path).map_err(|e| ScanError::InputError(format!("{}: {e}", path.display())))
}

impl Pdf {
    /// Open a PDF document from a file path.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InputError`] naming `path` if the file cannot be
    /// read, is not a valid PDF, or is encrypted.
    #[cfg(feature = "std")]
    pub fn open_file(path: impl AsRef<std::path::Path>) -> Result<Self, ScanError> {
        let path = path.as_ref();
        let bytes = read_file(path)?;
        Self::open(&bytes).map_err(|e| with_path(e, path))
    }

    /// Open an encrypted PDF document from a file path.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InputError`] naming `path` if the file cannot be
    /// read or parsed, or the password is wrong.
    #[cfg(feature = "std")]
    pub fn open_file_with_password(
        path: impl AsRef<std::path::Path>,
        password: &str,
    ) -> Result<Self, ScanError> {
        let path = path.as_ref();
        let bytes = read_file(path)?;
        Self::open_with_password(&bytes, password).map_err(|e| with_path(e, path))
    }

    /// Open a PDF document from bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InputError`] if the bytes are not a valid PDF or
    /// the document is encrypted.
    pub fn open(bytes: &[u8]) -> Result<Self, ScanError> {
        let doc = LopdfBackend::open(bytes).map_err(ScanError::from)?;
        Ok(Self { doc })
    }

    /// Open an encrypted PDF document from bytes with a password.
    ///
    /// If the PDF is not encrypted, the password is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InputError`] if the bytes are not a valid PDF or
    /// the password is wrong.
    pub fn open_with_password(bytes: &[u8], password: &str) -> Result<Self, ScanError> {
        let doc = LopdfBackend::open_with_password(bytes, password).map_err(ScanError::from)?;
        Ok(Self { doc })
    }

    /// Return the number of pages in the document.
    pub fn page_count(&self) -> usize {
        LopdfBackend::page_count(&self.doc)
    }

    /// Extract the text of the page at a 0-based index.
    ///
    /// The returned [`PageText`] carries the 1-based page number.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InputError`] if the index is out of range or the
    /// page content cannot be decoded.
    pub fn page_text(&self, index: usize) -> Result<PageText, ScanError> {
        let text = LopdfBackend::page_text(&self.doc, index).map_err(ScanError::from)?;
        let page_number = u32::try_from(index + 1)
            .map_err(|_| ScanError::input(format!("page index {index} is too large")))?;
        Ok(PageText { page_number, text })
    }

    /// Iterate over all pages in document order.
    pub fn pages_iter(&self) -> PagesIter<'_> {
        PagesIter {
            pdf: self,
            current: 0,
            count: self.page_count(),
        }
    }

    /// Extract the text of the given 0-based page indices, in the order given.
    ///
    /// # Errors
    ///
    /// Returns the first [`ScanError::InputError`] encountered.
    pub fn pages(&self, indices: &[usize]) -> Result<Vec<PageText>, ScanError> {
        indices.iter().map(|&i| self.page_text(i)).collect()
    }

    /// Scan the selected pages (all pages when `indices` is `None`).
    ///
    /// Options are validated before any page text is extracted.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::ConfigError`] for invalid options and
    /// [`ScanError::InputError`] if a page cannot be read.
    pub fn scan(
        &self,
        indices: Option<&[usize]>,
        options: &ScanOptions,
    ) -> Result<ScanResult<Vec<NumericMatch>>, ScanError> {
        options.validate()?;
        let pages = match indices {
            Some(indices) => self.pages(indices)?,
            None => self.pages_iter().collect::<Result<Vec<_>, _>>()?,
        };
        tracing::debug!(pages = pages.len(), "extracted page text");
        scan_pages(&pages, options)
    }

    /// Scan every page and return the top `options.top_n` normalized values.
    ///
    /// # Errors
    ///
    /// See [`Pdf::scan`].
    pub fn find_top_values(
        &self,
        options: &ScanOptions,
    ) -> Result<ScanResult<RankedResult>, ScanError> {
        let scanned = self.scan(None, options)?;
        Ok(scanned.map(|m| rank(m, options.top_n, Basis::Scaled, options.rank_by)))
    }

    /// Scan every page and return the top `options.top_n` numbers as written.
    ///
    /// # Errors
    ///
    /// See [`Pdf::scan`].
    pub fn find_top_raw_values(
        &self,
        options: &ScanOptions,
    ) -> Result<ScanResult<RankedResult>, ScanError> {
        let scanned = self.scan(None, options)?;
        Ok(scanned.map(|m| rank(m, options.top_n, Basis::Raw, options.rank_by)))
    }
}

/// Read the text of every page of the PDF at `path`.
///
/// # Errors
///
/// Returns [`ScanError::InputError`] naming `path` if the file is missing,
/// unreadable, corrupt, or encrypted.
#[cfg(feature = "std")]
pub fn extract_pages(path: impl AsRef<std::path::Path>) -> Result<Vec<PageText>, ScanError> {
    let path = path.as_ref();
    let pdf = Pdf::open_file(path)?;
    pdf.pages_iter()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| with_path(e, path))
}
