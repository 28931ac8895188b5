//! Outline output types.

use serde::{Deserialize, Serialize};

/// Heading level assigned from font-size rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Map a 0-based size rank to a level. Ranks past the third are body text.
    pub fn from_rank(rank: usize) -> Option<Self> {
        match rank {
            0 => Some(HeadingLevel::H1),
            1 => Some(HeadingLevel::H2),
            2 => Some(HeadingLevel::H3),
            _ => None,
        }
    }

    /// Numeric depth, 1 for H1.
    pub fn depth(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

impl std::fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "H{}", self.depth())
    }
}

/// One heading in a document outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    pub level: HeadingLevel,
    pub text: String,
    /// 1-indexed page number
    pub page: u32,
}

impl OutlineEntry {
    pub fn new(level: HeadingLevel, text: impl Into<String>, page: u32) -> Self {
        Self {
            level,
            text: text.into(),
            page,
        }
    }
}

/// Title and outline inferred for one document.
///
/// A document without usable text yields the empty result, which carries
/// neither field and serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<Vec<OutlineEntry>>,
}

impl DocumentResult {
    /// Create a result with a title and outline.
    pub fn new(title: impl Into<String>, outline: Vec<OutlineEntry>) -> Self {
        Self {
            title: Some(title.into()),
            outline: Some(outline),
        }
    }

    /// The result for a document with no usable spans.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if this is the empty result.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.outline.is_none()
    }

    /// The title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Outline entries; empty for the empty result.
    pub fn entries(&self) -> &[OutlineEntry] {
        self.outline.as_deref().unwrap_or(&[])
    }
}
