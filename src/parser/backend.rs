//! PDF backend abstraction layer.
//!
//! The span extractor only needs page enumeration, font names, decoded
//! content streams and text decoding. [`PdfBackend`] exposes exactly that,
//! keeping lopdf types out of the extraction logic.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Page identifier: (object number, generation number).
pub type PageId = (u32, u16);

/// US Letter, used when a page has no readable MediaBox.
pub const DEFAULT_PAGE_SIZE: (f32, f32) = (612.0, 792.0);

/// A value from a PDF content stream operand.
#[derive(Debug, Clone, PartialEq)]
pub enum PdfValue {
    Integer(i64),
    Real(f32),
    Name(Vec<u8>),
    Str(Vec<u8>),
    Array(Vec<PdfValue>),
    Other,
}

impl PdfValue {
    /// Numeric value of an integer or real operand.
    pub fn as_number(&self) -> Option<f32> {
        match self {
            PdfValue::Integer(i) => Some(*i as f32),
            PdfValue::Real(r) => Some(*r),
            _ => None,
        }
    }
}

/// A single operation from a PDF content stream.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentOp {
    pub operator: String,
    pub operands: Vec<PdfValue>,
}

impl ContentOp {
    pub fn new(operator: impl Into<String>, operands: Vec<PdfValue>) -> Self {
        Self {
            operator: operator.into(),
            operands,
        }
    }

    /// Numeric operand at `index`, or `default` if absent or not a number.
    pub fn number(&self, index: usize, default: f32) -> f32 {
        self.operands
            .get(index)
            .and_then(PdfValue::as_number)
            .unwrap_or(default)
    }
}

/// Abstract interface for PDF document access.
pub trait PdfBackend {
    /// Return all pages as (page_number → PageId), page numbers 1-indexed.
    fn pages(&self) -> BTreeMap<u32, PageId>;

    /// Width and height of a page in points.
    fn page_size(&self, page: PageId) -> (f32, f32);

    /// Map font resource names on a page to their base font names.
    fn page_fonts(&self, page: PageId) -> Result<BTreeMap<Vec<u8>, String>>;

    /// Return the decoded content stream operations for a page.
    fn page_operations(&self, page: PageId) -> Result<Vec<ContentOp>>;

    /// Decode a text byte sequence using the font's encoding on the given page.
    /// Falls back to simple decoding if the font or encoding is unavailable.
    fn decode_text(&self, page: PageId, font_name: &[u8], bytes: &[u8]) -> String;
}

/// Simple text decoding fallback when no encoding is available.
pub fn decode_text_simple(bytes: &[u8]) -> String {
    // UTF-16BE with BOM
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        return String::from_utf16_lossy(&utf16);
    }

    if let Ok(s) = std::str::from_utf8(bytes) {
        return s.to_string();
    }

    // Latin-1
    bytes.iter().map(|&b| b as char).collect()
}

// ---------------------------------------------------------------------------
// LopdfBackend: concrete implementation backed by lopdf
// ---------------------------------------------------------------------------

use lopdf::{Document as LopdfDocument, Object};

/// Concrete [`PdfBackend`] backed by `lopdf::Document`.
pub struct LopdfBackend {
    doc: LopdfDocument,
}

impl LopdfBackend {
    /// Load from a file path.
    pub fn load_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let doc = LopdfDocument::load(path)?;
        Ok(Self { doc })
    }

    /// Load from an in-memory byte slice.
    pub fn load_bytes(data: &[u8]) -> Result<Self> {
        let doc = LopdfDocument::load_mem(data)?;
        Ok(Self { doc })
    }

    /// Check if the document is encrypted.
    pub fn is_encrypted(&self) -> bool {
        self.doc.is_encrypted()
    }

    /// Get PDF version string.
    pub fn version(&self) -> String {
        self.doc.version.to_string()
    }

    fn content_bytes(&self, page_id: PageId) -> Result<Vec<u8>> {
        let page_dict = self.doc.get_dictionary(page_id)?;
        let contents = page_dict.get(b"Contents")?;

        match contents {
            Object::Reference(r) => match self.doc.get_object(*r)? {
                Object::Stream(s) => stream_bytes(s),
                _ => Err(Error::PdfParse("Invalid content stream".to_string())),
            },
            Object::Array(parts) => {
                let mut content = Vec::new();
                for part in parts {
                    let stream = part
                        .as_reference()
                        .and_then(|r| self.doc.get_object(r))
                        .and_then(Object::as_stream);
                    match stream {
                        Ok(s) => {
                            content.extend_from_slice(&stream_bytes(s)?);
                            content.push(b' ');
                        }
                        Err(e) => log::warn!("skipping content part {:?}: {}", part, e),
                    }
                }
                Ok(content)
            }
            Object::Stream(s) => stream_bytes(s),
            _ => Err(Error::PdfParse("Invalid content stream".to_string())),
        }
    }
}

/// Raw bytes of an unfiltered stream, decoded bytes of a filtered one.
fn stream_bytes(stream: &lopdf::Stream) -> Result<Vec<u8>> {
    if stream.dict.has(b"Filter") {
        Ok(stream.decompressed_content()?)
    } else {
        Ok(stream.content.clone())
    }
}

impl PdfBackend for LopdfBackend {
    fn pages(&self) -> BTreeMap<u32, PageId> {
        self.doc.get_pages()
    }

    fn page_size(&self, page: PageId) -> (f32, f32) {
        let media_box = self
            .doc
            .get_dictionary(page)
            .and_then(|dict| dict.get(b"MediaBox"))
            .and_then(|obj| obj.as_array());

        match media_box {
            Ok(array) if array.len() >= 4 => {
                let coord = |i: usize| array[i].as_float().ok();
                match (coord(0), coord(1), coord(2), coord(3)) {
                    (Some(x0), Some(y0), Some(x1), Some(y1)) => ((x1 - x0).abs(), (y1 - y0).abs()),
                    _ => DEFAULT_PAGE_SIZE,
                }
            }
            _ => DEFAULT_PAGE_SIZE,
        }
    }

    fn page_fonts(&self, page: PageId) -> Result<BTreeMap<Vec<u8>, String>> {
        let fonts = self.doc.get_page_fonts(page)?;

        Ok(fonts
            .into_iter()
            .map(|(name, font_dict)| {
                let base_font = font_dict
                    .get(b"BaseFont")
                    .ok()
                    .and_then(|o| o.as_name().ok())
                    .map(|n| String::from_utf8_lossy(n).to_string())
                    .unwrap_or_else(|| "Unknown".to_string());
                (name, base_font)
            })
            .collect())
    }

    fn page_operations(&self, page: PageId) -> Result<Vec<ContentOp>> {
        let data = self.content_bytes(page)?;
        let content = lopdf::content::Content::decode(&data)?;

        Ok(content
            .operations
            .into_iter()
            .map(|op| ContentOp {
                operator: op.operator,
                operands: op.operands.iter().map(convert_object).collect(),
            })
            .collect())
    }

    fn decode_text(&self, page: PageId, font_name: &[u8], bytes: &[u8]) -> String {
        if let Ok(fonts) = self.doc.get_page_fonts(page) {
            if let Some(font_dict) = fonts.get(font_name) {
                if let Ok(enc) = font_dict.get_font_encoding(&self.doc) {
                    if let Ok(text) = LopdfDocument::decode_text(&enc, bytes) {
                        return text;
                    }
                }
            }
        }
        decode_text_simple(bytes)
    }
}

/// Convert a `lopdf::Object` to [`PdfValue`].
fn convert_object(obj: &Object) -> PdfValue {
    match obj {
        Object::Integer(i) => PdfValue::Integer(*i),
        Object::Real(r) => PdfValue::Real(*r),
        Object::Name(n) => PdfValue::Name(n.clone()),
        Object::String(b, _) => PdfValue::Str(b.clone()),
        Object::Array(arr) => PdfValue::Array(arr.iter().map(convert_object).collect()),
        _ => PdfValue::Other,
    }
}
