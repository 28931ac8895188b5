//! Title detection from the largest font on the first page.

use crate::model::{FontSize, TextSpan};

use super::OutlineOptions;

/// Pick the document title.
///
/// Every page-1 span set at `largest` with at least `min_title_words` words
/// contributes, joined by single spaces in parser order.
pub fn detect_title(spans: &[TextSpan], largest: FontSize, options: &OutlineOptions) -> String {
    let parts: Vec<&str> = spans
        .iter()
        .filter(|span| span.page == 1 && span.size == largest)
        .filter(|span| span.word_count() >= options.min_title_words)
        .map(|span| span.text.as_str())
        .collect();

    let title = parts.join(" ");
    let title = title.trim();
    if title.is_empty() {
        options.untitled_placeholder.clone()
    } else {
        title.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(text: &str, page: u32, size: f32) -> TextSpan {
        TextSpan::new(text, page, "Helvetica-Bold", size)
    }

    fn largest(points: f32) -> FontSize {
        FontSize::from_points(points)
    }

    #[test]
    fn test_title_from_largest_page_one_span() {
        let spans = vec![
            span("Annual Report 2024", 1, 24.0),
            span("1. Introduction", 1, 18.0),
        ];
        let title = detect_title(&spans, largest(24.0), &OutlineOptions::default());
        assert_eq!(title, "Annual Report 2024");
    }

    #[test]
    fn test_title_joins_multiple_spans_in_order() {
        let spans = vec![
            span("Understanding Distributed Systems", 1, 26.0),
            span("A Practical Field Guide", 1, 26.0),
        ];
        let title = detect_title(&spans, largest(26.0), &OutlineOptions::default());
        assert_eq!(
            title,
            "Understanding Distributed Systems A Practical Field Guide"
        );
    }

    #[test]
    fn test_title_requires_more_than_two_words() {
        let spans = vec![span("Q", 1, 40.0), span("Big Label", 1, 40.0)];
        let title = detect_title(&spans, largest(40.0), &OutlineOptions::default());
        assert_eq!(title, "Untitled");
    }

    #[test]
    fn test_title_ignores_other_pages() {
        let spans = vec![
            span("Section on page two", 2, 30.0),
            span("Small first page text", 1, 12.0),
        ];
        let title = detect_title(&spans, largest(30.0), &OutlineOptions::default());
        assert_eq!(title, "Untitled");
    }

    #[test]
    fn test_title_uses_configured_placeholder() {
        let options = OutlineOptions::new().with_untitled_placeholder("No Title");
        let title = detect_title(&[], largest(12.0), &options);
        assert_eq!(title, "No Title");
    }
}
