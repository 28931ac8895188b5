//! Span normalization: drops text that cannot be a title or heading.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::TextSpan;

static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9.\-]+$").expect("valid numeric pattern"));
static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[. \-]{5,}$").expect("valid separator pattern"));

/// Filters raw span text down to plausible title and heading candidates.
///
/// A span is discarded when its trimmed text is
///
/// 1. empty or at most two characters long,
/// 2. made only of digits, periods and hyphens (page numbers, versions),
/// 3. five or more periods, spaces and hyphens (leaders and rules),
/// 4. a copyright line or anything mentioning "page" (running headers),
/// 5. an all-uppercase token of at most four characters (acronyms).
///
/// Surviving text is trimmed and otherwise left untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanNormalizer;

impl SpanNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Return the trimmed text, or `None` if it should be discarded.
    pub fn clean_text<'t>(&self, text: &'t str) -> Option<&'t str> {
        let text = text.trim();

        if text.chars().count() <= 2 {
            return None;
        }
        if NUMERIC.is_match(text) {
            return None;
        }
        if SEPARATOR.is_match(text) {
            return None;
        }

        let lower = text.to_lowercase();
        if lower.starts_with("copyright") || lower.contains("page") {
            return None;
        }

        if is_uppercase(text) && text.chars().count() <= 4 {
            return None;
        }

        Some(text)
    }

    /// Clean one span, replacing its text with the trimmed form.
    pub fn clean_span(&self, mut span: TextSpan) -> Option<TextSpan> {
        let cleaned = self.clean_text(&span.text)?;
        if cleaned.len() != span.text.len() {
            span.text = cleaned.to_string();
        }
        Some(span)
    }

    /// Clean a document's spans, keeping parser order.
    pub fn normalize_spans<I>(&self, spans: I) -> Vec<TextSpan>
    where
        I: IntoIterator<Item = TextSpan>,
    {
        let mut total = 0usize;
        let cleaned: Vec<TextSpan> = spans
            .into_iter()
            .inspect(|_| total += 1)
            .filter_map(|span| self.clean_span(span))
            .collect();

        log::debug!("normalizer kept {} of {} spans", cleaned.len(), total);
        cleaned
    }
}

/// At least one cased character and no lowercase ones.
fn is_uppercase(text: &str) -> bool {
    let mut has_cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}
