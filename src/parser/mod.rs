//! PDF parsing module.
//!
//! Turns a PDF container into the flat, ordered [`TextSpan`] sequence the
//! outline pipeline consumes. Object parsing and stream decompression are
//! left to lopdf.
//!
//! [`TextSpan`]: crate::model::TextSpan

mod backend;
mod options;
mod pdf_parser;
mod spans;

pub use backend::{
    decode_text_simple, ContentOp, LopdfBackend, PageId, PdfBackend, PdfValue, DEFAULT_PAGE_SIZE,
};
pub use options::{ErrorMode, PageSelection, ParseOptions};
pub use pdf_parser::PdfParser;
pub use spans::SpanExtractor;
