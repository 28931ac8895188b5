//! # pdf-outline
//!
//! Infers a document title and an H1–H3 outline from the typography of a
//! PDF's text runs.
//!
//! PDFs rarely say which lines are headings, so the structure is rebuilt
//! from font sizes alone: text is cleaned of page furniture, the distinct
//! sizes are ranked largest first, the largest page-1 text becomes the title
//! and the three largest sizes become heading levels.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdf_outline::{extract_outline, render};
//!
//! fn main() -> pdf_outline::Result<()> {
//!     let result = extract_outline("report.pdf")?;
//!     println!("{}", render::to_json(&result, render::JsonFormat::Pretty)?);
//!     Ok(())
//! }
//! ```
//!
//! Spans from another source can be classified directly:
//!
//! ```
//! use pdf_outline::{outline_from_spans, TextSpan};
//!
//! let spans = vec![
//!     TextSpan::new("Annual Report 2024", 1, "Helvetica-Bold", 24.0),
//!     TextSpan::new("1. Introduction", 1, "Helvetica-Bold", 18.0),
//! ];
//! let result = outline_from_spans(spans);
//! assert_eq!(result.title(), Some("Annual Report 2024"));
//! ```

pub mod batch;
pub mod detect;
pub mod error;
pub mod model;
pub mod outline;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use batch::{BatchOptions, BatchProcessor, BatchReport, FileReport};
pub use detect::{has_pdf_extension, sniff_bytes, sniff_file, PdfHeader};
pub use error::{Error, Result};
pub use model::{
    BoundingBox, DocumentResult, FontSize, HeadingLevel, OutlineEntry, StyleFlags, TextSpan,
};
pub use outline::{OutlineOptions, OutlinePipeline, SizeRankOrder, SpanNormalizer};
pub use parser::{ErrorMode, PageSelection, ParseOptions, PdfParser};
pub use render::JsonFormat;

use std::path::Path;

/// Extract the raw text spans of a PDF file.
pub fn extract_spans<P: AsRef<Path>>(path: P) -> Result<Vec<TextSpan>> {
    PdfParser::open(path)?.extract_spans()
}

/// Infer the title and outline of a PDF file.
///
/// # Example
///
/// ```no_run
/// let result = pdf_outline::extract_outline("report.pdf").unwrap();
/// for entry in result.entries() {
///     println!("{} {} (page {})", entry.level, entry.text, entry.page);
/// }
/// ```
pub fn extract_outline<P: AsRef<Path>>(path: P) -> Result<DocumentResult> {
    OutlineExtractor::new().extract(path)
}

/// Infer the title and outline of a PDF held in memory.
pub fn extract_outline_bytes(data: &[u8]) -> Result<DocumentResult> {
    OutlineExtractor::new().extract_bytes(data)
}

/// Infer the title and outline from already-extracted spans.
///
/// Never fails; a span list with no usable text yields
/// [`DocumentResult::empty`].
pub fn outline_from_spans<I>(spans: I) -> DocumentResult
where
    I: IntoIterator<Item = TextSpan>,
{
    OutlinePipeline::new().process(spans)
}

/// Infer the outline of a PDF file without blocking the async runtime.
///
/// The file is read with `tokio::fs` and classified on the blocking pool.
#[cfg(feature = "async")]
pub async fn extract_outline_async<P: AsRef<Path>>(path: P) -> Result<DocumentResult> {
    let data = tokio::fs::read(path).await?;
    tokio::task::spawn_blocking(move || extract_outline_bytes(&data))
        .await
        .map_err(|e| Error::Other(format!("outline task failed: {}", e)))?
}

/// Builder for reading PDFs and inferring their outlines.
///
/// # Example
///
/// ```no_run
/// use pdf_outline::{OutlineExtractor, OutlineOptions, PageSelection};
///
/// let result = OutlineExtractor::new()
///     .lenient()
///     .with_pages(PageSelection::Range(1..=20))
///     .with_outline_options(OutlineOptions::new().with_max_heading_words(12))
///     .extract("report.pdf")?;
/// # Ok::<(), pdf_outline::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct OutlineExtractor {
    parse_options: ParseOptions,
    pipeline: OutlinePipeline,
}

impl OutlineExtractor {
    /// Create a new extractor with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip unreadable pages instead of failing the document.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.parse_options = self.parse_options.with_pages(pages);
        self
    }

    /// Replace the parse options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Replace the outline thresholds.
    pub fn with_outline_options(mut self, options: OutlineOptions) -> Self {
        self.pipeline = OutlinePipeline::with_options(options);
        self
    }

    pub fn parse_options(&self) -> &ParseOptions {
        &self.parse_options
    }

    pub fn outline_options(&self) -> &OutlineOptions {
        self.pipeline.options()
    }

    /// Read a PDF file and infer its outline.
    pub fn extract<P: AsRef<Path>>(&self, path: P) -> Result<DocumentResult> {
        let parser = PdfParser::open_with_options(path, self.parse_options.clone())?;
        Ok(self.pipeline.process(parser.extract_spans()?))
    }

    /// Read a PDF from bytes and infer its outline.
    pub fn extract_bytes(&self, data: &[u8]) -> Result<DocumentResult> {
        let parser = PdfParser::from_bytes_with_options(data, self.parse_options.clone())?;
        Ok(self.pipeline.process(parser.extract_spans()?))
    }

    /// Infer the outline of already-extracted spans.
    pub fn classify<I>(&self, spans: I) -> DocumentResult
    where
        I: IntoIterator<Item = TextSpan>,
    {
        self.pipeline.process(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extractor_builder() {
        let extractor = OutlineExtractor::new()
            .lenient()
            .with_pages(PageSelection::Pages(vec![1, 2]))
            .with_outline_options(OutlineOptions::new().with_max_heading_chars(50));

        assert_eq!(extractor.parse_options().error_mode, ErrorMode::Lenient);
        assert_eq!(
            extractor.parse_options().pages,
            PageSelection::Pages(vec![1, 2])
        );
        assert_eq!(extractor.outline_options().max_heading_chars, 50);
    }

    #[test]
    fn test_extractor_default() {
        let extractor = OutlineExtractor::default();
        assert_eq!(extractor.parse_options().error_mode, ErrorMode::Strict);
        assert_eq!(extractor.outline_options(), &OutlineOptions::default());
    }

    #[test]
    fn test_extract_bytes_rejects_invalid_data() {
        assert!(extract_outline_bytes(b"").is_err());
        assert!(extract_outline_bytes(b"%PDF").is_err());
        assert!(matches!(
            extract_outline_bytes(b"not a pdf document"),
            Err(Error::UnknownFormat)
        ));
    }

    #[test]
    fn test_outline_from_spans() {
        let result = outline_from_spans(vec![
            TextSpan::new("Quarterly Business Review", 1, "Helvetica-Bold", 22.0),
            TextSpan::new("Highlights", 1, "Helvetica-Bold", 16.0),
            TextSpan::new("Revenue grew in every region.", 1, "Helvetica", 10.0),
            TextSpan::new("Page 1 of 9", 1, "Helvetica", 8.0),
        ]);

        assert_eq!(result.title(), Some("Quarterly Business Review"));
        let texts: Vec<_> = result.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Quarterly Business Review",
                "Highlights",
                "Revenue grew in every region."
            ]
        );
    }

    #[test]
    fn test_classify_with_custom_options() {
        let extractor = OutlineExtractor::new()
            .with_outline_options(OutlineOptions::new().with_untitled_placeholder("?"));
        let result = extractor.classify(vec![TextSpan::new("Preface", 1, "Times-Bold", 14.0)]);
        assert_eq!(result.title(), Some("?"));
        assert_eq!(result.entries().len(), 1);
    }
}
