//! Outline inference thresholds.

/// Thresholds used by the title detector and the outline classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineOptions {
    /// Longest heading text, in characters
    pub max_heading_chars: usize,

    /// Most words a heading may contain
    pub max_heading_words: usize,

    /// Fewest words a title span must contain
    pub min_title_words: usize,

    /// Title used when no page-1 span qualifies
    pub untitled_placeholder: String,
}

impl OutlineOptions {
    /// Create new outline options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the longest heading text, in characters.
    pub fn with_max_heading_chars(mut self, chars: usize) -> Self {
        self.max_heading_chars = chars;
        self
    }

    /// Set the most words a heading may contain.
    pub fn with_max_heading_words(mut self, words: usize) -> Self {
        self.max_heading_words = words;
        self
    }

    /// Set the fewest words a title span must contain.
    pub fn with_min_title_words(mut self, words: usize) -> Self {
        self.min_title_words = words;
        self
    }

    /// Set the placeholder title.
    pub fn with_untitled_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.untitled_placeholder = placeholder.into();
        self
    }
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            max_heading_chars: 100,
            max_heading_words: 20,
            min_title_words: 3,
            untitled_placeholder: "Untitled".to_string(),
        }
    }
}
