//! Builds small PDFs with lopdf for integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// One line of text: font resource ("F1" bold, "F2" regular), size, text.
pub type Line<'a> = (&'a str, i64, &'a str);

/// Build a PDF with one page per entry of `pages`, each line on its own
/// baseline from the top of an A4 page. Content streams are unfiltered.
pub fn build_pdf(pages: &[Vec<Line<'_>>]) -> Vec<u8> {
    build_pdf_with(pages, false)
}

/// Like [`build_pdf`], with FlateDecode content streams.
pub fn build_compressed_pdf(pages: &[Vec<Line<'_>>]) -> Vec<u8> {
    build_pdf_with(pages, true)
}

fn build_pdf_with(pages: &[Vec<Line<'_>>], compress: bool) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => bold_id,
            "F2" => regular_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for lines in pages {
        let mut operations = vec![Operation::new("BT", vec![])];
        let mut y = 780;
        for (font, size, text) in lines {
            operations.push(Operation::new("Tf", vec![Object::from(*font), Object::from(*size)]));
            operations.push(Operation::new("Tm", vec![
                1.into(), 0.into(), 0.into(), 1.into(), 72.into(), y.into(),
            ]));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*text)]));
            y -= (*size as i32) * 2;
        }
        operations.push(Operation::new("ET", vec![]));

        let content = Content { operations }.encode().expect("encode content");
        let stream = if compress {
            let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(&content).expect("deflate content");
            Stream::new(
                dictionary! { "Filter" => "FlateDecode" },
                encoder.finish().expect("deflate content"),
            )
        } else {
            Stream::new(dictionary! {}, content)
        };
        let content_id = doc.add_object(stream);
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        kids.push(page_id.into());
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

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("save pdf");
    bytes
}

/// The two-page report used across the extraction tests.
pub fn annual_report() -> Vec<u8> {
    build_pdf(&[
        vec![
            ("F1", 24, "Annual Report 2024"),
            ("F1", 18, "1. Introduction"),
            ("F2", 10, "Page 1 of 2"),
        ],
        vec![
            ("F1", 18, "2. Results"),
            ("F2", 10, "Revenue grew steadily across all regions this year."),
            ("F2", 10, "12"),
        ],
    ])
}

/// A one-page PDF whose `/Contents` is not a stream.
pub fn unreadable_pdf() -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => 42,
        "Resources" => dictionary! {},
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::from(page_id)],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("save pdf");
    bytes
}

pub fn write_pdf(path: &Path, bytes: &[u8]) {
    std::fs::write(path, bytes).expect("write pdf");
}
