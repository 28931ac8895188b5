//! PDF document parser using lopdf.

use std::io::Read;
use std::path::Path;

use crate::detect::{sniff_bytes, sniff_file};
use crate::error::{Error, Result};
use crate::model::TextSpan;

use super::backend::{LopdfBackend, PdfBackend};
use super::options::{ErrorMode, ParseOptions};
use super::spans::SpanExtractor;

/// Reads the text spans of a PDF document.
pub struct PdfParser {
    backend: LopdfBackend,
    options: ParseOptions,
}

impl PdfParser {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a PDF file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        sniff_file(path)?;
        let backend = LopdfBackend::load_file(path)?;
        Ok(Self::with_backend(backend, options))
    }

    /// Parse a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a PDF from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        sniff_bytes(data)?;
        let backend = LopdfBackend::load_bytes(data)?;
        Ok(Self::with_backend(backend, options))
    }

    /// Parse a PDF from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    fn with_backend(backend: LopdfBackend, options: ParseOptions) -> Self {
        if backend.is_encrypted() {
            log::warn!("document is encrypted; text may not decode");
        }
        Self { backend, options }
    }

    /// Extract the spans of every selected page, in page order.
    ///
    /// In strict mode the first unreadable page, or a selection past the
    /// last page, aborts extraction; in lenient mode both are logged and
    /// skipped. A lenient run in which no selected page could be read fails
    /// with the last page error.
    pub fn extract_spans(&self) -> Result<Vec<TextSpan>> {
        let page_count = self.page_count();
        if let Some(last) = self.options.pages.last_page() {
            if last > page_count {
                if self.options.error_mode == ErrorMode::Strict {
                    return Err(Error::PageOutOfRange(last, page_count));
                }
                log::warn!("page {} requested but document has {} pages", last, page_count);
            }
        }

        let extractor = SpanExtractor::new(&self.backend);
        let mut spans = Vec::new();
        let mut pages_read = 0usize;
        let mut last_error = None;

        for (page_num, page_id) in self.backend.pages() {
            if !self.options.pages.includes(page_num) {
                continue;
            }

            match extractor.extract_page(page_num, page_id) {
                Ok(page_spans) => {
                    pages_read += 1;
                    spans.extend(page_spans);
                }
                Err(e) if self.options.error_mode == ErrorMode::Lenient => {
                    log::warn!("Failed to extract text from page {}: {}", page_num, e);
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        match last_error {
            Some(e) if pages_read == 0 => Err(e),
            _ => Ok(spans),
        }
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.backend.pages().len() as u32
    }

    /// Check if the document is encrypted.
    pub fn is_encrypted(&self) -> bool {
        self.backend.is_encrypted()
    }

    /// Get PDF version.
    pub fn version(&self) -> String {
        self.backend.version()
    }
}
