//! Data model shared by the extractor and the outline pipeline.
//!
//! [`TextSpan`] is what the extractor produces; [`DocumentResult`] is what
//! the pipeline returns.

mod outline;
mod span;

pub use outline::{DocumentResult, HeadingLevel, OutlineEntry};
pub use span::{BoundingBox, FontSize, StyleFlags, TextSpan};
