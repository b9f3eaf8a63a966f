//! Shared PDF fixtures for integration tests.
//!
//! Documents are built in-process with lopdf: one page per entry, one text
//! object per line.

#![allow(dead_code)]

use std::io::Write;

use lopdf::{
    Document, EncryptionState, EncryptionVersion, Object, Permissions, Stream, StringFormat,
    dictionary,
};

fn document_with_pages(pages: &[&[&str]]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });

    let mut kids = Vec::new();
    for lines in pages {
        let mut content = String::new();
        for (i, line) in lines.iter().enumerate() {
            let y = 720 - 20 * i;
            // trailing space keeps adjacent lines from running together
            content.push_str(&format!("BT /F1 12 Tf 72 {y} Td ({line} ) Tj ET\n"));
        }
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

fn save(mut doc: Document) -> Vec<u8> {
    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// Create a PDF with one page per entry.
pub fn pdf_with_pages(pages: &[&[&str]]) -> Vec<u8> {
    save(document_with_pages(pages))
}

/// Create an RC4-encrypted (V2, 128-bit) PDF that opens with `user_password`.
pub fn encrypted_pdf_with_pages(pages: &[&[&str]], user_password: &str) -> Vec<u8> {
    let mut doc = document_with_pages(pages);
    doc.trailer.set(
        "ID",
        Object::Array(vec![
            Object::String(b"numscan-fixture-1".to_vec(), StringFormat::Literal),
            Object::String(b"numscan-fixture-2".to_vec(), StringFormat::Literal),
        ]),
    );

    let version = EncryptionVersion::V2 {
        document: &doc,
        owner_password: "owner",
        user_password,
        key_length: 128,
        permissions: Permissions::all(),
    };
    let state = EncryptionState::try_from(version).unwrap();
    doc.encrypt(&state).unwrap();
    save(doc)
}

/// Write `bytes` to a fresh `.pdf` temp file.
pub fn write_temp_pdf(bytes: &[u8]) -> tempfile::NamedTempFile {
    let mut tmp = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    tmp.write_all(bytes).unwrap();
    tmp.flush().unwrap();
    tmp
}
