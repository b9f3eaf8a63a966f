//! lopdf-based text backend.
//!
//! Implements [`PdfBackend`] using the [lopdf](https://crates.io/crates/lopdf)
//! crate. This is the default backend for numscan.

use crate::backend::PdfBackend;
use crate::error::BackendError;

/// A parsed PDF document backed by lopdf.
pub struct LopdfDocument {
    /// The underlying lopdf document.
    inner: lopdf::Document,
    /// Page numbers as lopdf keys them (1-based, document order).
    page_numbers: Vec<u32>,
}

impl LopdfDocument {
    fn new(inner: lopdf::Document) -> Self {
        // get_pages returns a BTreeMap keyed by 1-based page number
        let page_numbers = inner.get_pages().keys().copied().collect();
        Self {
            inner,
            page_numbers,
        }
    }

    /// Access the underlying lopdf document.
    pub fn inner(&self) -> &lopdf::Document {
        &self.inner
    }
}

impl std::fmt::Debug for LopdfDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LopdfDocument")
            .field("page_count", &self.page_numbers.len())
            .finish_non_exhaustive()
    }
}

/// The lopdf-based PDF backend.
///
/// # Example
///
/// ```ignore
/// use numscan_parse::{LopdfBackend, PdfBackend};
///
/// let doc = LopdfBackend::open(pdf_bytes)?;
/// let text = LopdfBackend::page_text(&doc, 0)?;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfBackend;

fn load(bytes: &[u8]) -> Result<lopdf::Document, BackendError> {
    lopdf::Document::load_mem(bytes)
        .map_err(|e| BackendError::Parse(format!("failed to parse PDF: {e}")))
}

impl PdfBackend for LopdfBackend {
    type Document = LopdfDocument;
    type Error = BackendError;

    fn open(bytes: &[u8]) -> Result<Self::Document, Self::Error> {
        let inner = load(bytes)?;

        // Reject encrypted PDFs when no password is provided
        if inner.is_encrypted() {
            return Err(BackendError::PasswordRequired);
        }

        let doc = LopdfDocument::new(inner);
        tracing::debug!(pages = doc.page_numbers.len(), "opened PDF");
        Ok(doc)
    }

    fn open_with_password(bytes: &[u8], password: &str) -> Result<Self::Document, Self::Error> {
        // lopdf only reads encrypted objects when the password is given at load time
        let inner = lopdf::Document::load_mem_with_password(bytes, password)
            .map_err(|e| match e {
                lopdf::Error::InvalidPassword => BackendError::InvalidPassword,
                other => BackendError::Parse(format!("failed to parse PDF: {other}")),
            })?;

        let doc = LopdfDocument::new(inner);
        tracing::debug!(pages = doc.page_numbers.len(), "opened PDF with password");
        Ok(doc)
    }

    fn page_count(doc: &Self::Document) -> usize {
        doc.page_numbers.len()
    }

    fn page_text(doc: &Self::Document, index: usize) -> Result<String, Self::Error> {
        let page = *doc.page_numbers.get(index).ok_or_else(|| {
            BackendError::Parse(format!(
                "page index {index} out of range (0..{})",
                doc.page_numbers.len()
            ))
        })?;

        let text = doc
            .inner
            .extract_text(&[page])
            .map_err(|e| BackendError::Text {
                page,
                message: e.to_string(),
            })?;
        tracing::debug!(page, chars = text.len(), "extracted page text");
        Ok(text)
    }
}

/// Build a document with one page per entry, each showing the entry as a
/// single line of Helvetica text.
#[cfg(test)]
fn test_document(pages: &[&str]) -> lopdf::Document {
    use lopdf::{Object, Stream, dictionary};

    let mut doc = lopdf::Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });

    let mut kids = Vec::new();
    for text in pages {
        let content = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => content_id,
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_id },
            },
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

#[cfg(test)]
pub(crate) fn create_test_pdf(pages: &[&str]) -> Vec<u8> {
    let mut doc = test_document(pages);
    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("failed to save test PDF");
    buf
}

/// Like [`create_test_pdf`], but RC4-encrypted (V2, 128-bit) with
/// `user_password`.
#[cfg(test)]
pub(crate) fn create_encrypted_test_pdf(pages: &[&str], user_password: &str) -> Vec<u8> {
    use lopdf::{EncryptionState, EncryptionVersion, Object, Permissions, StringFormat};

    let mut doc = test_document(pages);
    // The file ID feeds the encryption key
    doc.trailer.set(
        "ID",
        Object::Array(vec![
            Object::String(b"numscan-test-id1".to_vec(), StringFormat::Literal),
            Object::String(b"numscan-test-id2".to_vec(), StringFormat::Literal),
        ]),
    );

    let version = EncryptionVersion::V2 {
        document: &doc,
        owner_password: "owner",
        user_password,
        key_length: 128,
        permissions: Permissions::all(),
    };
    let state = EncryptionState::try_from(version).expect("valid encryption parameters");
    doc.encrypt(&state).expect("failed to encrypt test PDF");

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("failed to save test PDF");
    buf
}
