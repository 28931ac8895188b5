//! Heading classification by font-size rank.

use std::collections::HashSet;

use crate::model::{HeadingLevel, OutlineEntry, TextSpan};

use super::{OutlineOptions, SizeRankOrder};

/// Map cleaned spans to outline entries.
///
/// Spans are visited in parser order. The first span carrying a given text
/// decides for that text: later spans with the identical (case-sensitive)
/// text are dropped, even when the first one was not itself emitted. Sizes
/// ranked 0, 1 and 2 become H1, H2 and H3; everything smaller is body text.
/// Text over `max_heading_chars` characters or `max_heading_words` words is
/// treated as a paragraph and skipped.
pub fn classify_spans(
    spans: &[TextSpan],
    ranking: &SizeRankOrder,
    options: &OutlineOptions,
) -> Vec<OutlineEntry> {
    let ranks = ranking.rank_lookup();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut outline = Vec::new();

    for span in spans {
        if !seen.insert(span.text.as_str()) {
            continue;
        }

        let level = match ranks.get(&span.size).copied().and_then(HeadingLevel::from_rank) {
            Some(level) => level,
            None => continue,
        };

        if span.char_count() > options.max_heading_chars
            || span.word_count() > options.max_heading_words
        {
            continue;
        }

        outline.push(OutlineEntry::new(level, span.text.clone(), span.page));
    }

    log::debug!(
        "classified {} of {} spans as headings across {} size ranks",
        outline.len(),
        spans.len(),
        ranking.len()
    );
    outline
}
