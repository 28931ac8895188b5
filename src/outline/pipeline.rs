//! Per-document outline pipeline.

use crate::model::{DocumentResult, TextSpan};

use super::{classify_spans, detect_title, OutlineOptions, SizeRankOrder, SpanNormalizer};

/// Turns a document's extracted spans into its title and outline.
///
/// The pipeline holds only configuration; every call to [`process`] builds
/// and drops its own histogram, ranking and dedup state, so one pipeline can
/// be shared across threads.
///
/// [`process`]: OutlinePipeline::process
#[derive(Debug, Clone, Default)]
pub struct OutlinePipeline {
    normalizer: SpanNormalizer,
    options: OutlineOptions,
}

impl OutlinePipeline {
    /// Create a pipeline with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline with custom thresholds.
    pub fn with_options(options: OutlineOptions) -> Self {
        Self {
            normalizer: SpanNormalizer::new(),
            options,
        }
    }

    pub fn options(&self) -> &OutlineOptions {
        &self.options
    }

    /// Infer the title and outline of one document.
    ///
    /// Returns [`DocumentResult::empty`] when no span survives normalization.
    /// The title span is not removed from the outline: if it also passes the
    /// heading limits it is listed as H1 as well.
    pub fn process<I>(&self, spans: I) -> DocumentResult
    where
        I: IntoIterator<Item = TextSpan>,
    {
        let spans = self.normalizer.normalize_spans(spans);

        let ranking = SizeRankOrder::from_spans(&spans);
        let largest = match ranking.largest() {
            Some(size) => size,
            None => {
                log::debug!("no usable spans, returning empty result");
                return DocumentResult::empty();
            }
        };

        let title = detect_title(&spans, largest, &self.options);
        let outline = classify_spans(&spans, &ranking, &self.options);

        DocumentResult::new(title, outline)
    }
}
