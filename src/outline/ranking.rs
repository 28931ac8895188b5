//! Font size statistics and the per-document size ranking.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::model::{FontSize, TextSpan};

/// Occurrence count of each rounded font size in a document.
#[derive(Debug, Clone, Default)]
pub struct SizeHistogram {
    counts: HashMap<FontSize, usize>,
}

impl SizeHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally the sizes of every span.
    pub fn from_spans(spans: &[TextSpan]) -> Self {
        let mut histogram = Self::new();
        for span in spans {
            histogram.add_size(span.size);
        }
        histogram
    }

    /// Add a font size observation.
    pub fn add_size(&mut self, size: FontSize) {
        *self.counts.entry(size).or_insert(0) += 1;
    }

    /// How many times `size` was observed.
    pub fn count(&self, size: FontSize) -> usize {
        self.counts.get(&size).copied().unwrap_or(0)
    }

    /// Number of distinct sizes.
    pub fn distinct_sizes(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Order the distinct sizes largest first, more frequent first on ties.
    pub fn rank(self) -> SizeRankOrder {
        let mut entries: Vec<(FontSize, usize)> = self.counts.into_iter().collect();
        entries.sort_by_key(|&(size, count)| (Reverse(size), Reverse(count)));

        SizeRankOrder {
            sizes: entries.into_iter().map(|(size, _)| size).collect(),
        }
    }
}

/// Distinct font sizes of a document, largest first.
///
/// Rank 0 is the presumed title/H1 size. Each size appears exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeRankOrder {
    sizes: Vec<FontSize>,
}

impl SizeRankOrder {
    /// Rank the sizes of a set of cleaned spans.
    pub fn from_spans(spans: &[TextSpan]) -> Self {
        SizeHistogram::from_spans(spans).rank()
    }

    /// The rank-0 size, if any span was ranked.
    pub fn largest(&self) -> Option<FontSize> {
        self.sizes.first().copied()
    }

    /// 0-based rank of `size`, or `None` if it never occurred.
    pub fn rank_of(&self, size: FontSize) -> Option<usize> {
        self.sizes.iter().position(|&s| s == size)
    }

    /// Build a size to rank lookup table.
    pub fn rank_lookup(&self) -> HashMap<FontSize, usize> {
        self.sizes
            .iter()
            .enumerate()
            .map(|(rank, &size)| (size, rank))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = FontSize> + '_ {
        self.sizes.iter().copied()
    }

    pub fn as_slice(&self) -> &[FontSize] {
        &self.sizes
    }
}
