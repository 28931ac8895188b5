//! Outline inference from span typography.
//!
//! The stages run in this order for each document:
//!
//! 1. [`SpanNormalizer`] drops page numbers, rules, running headers and
//!    short acronyms.
//! 2. [`SizeHistogram`] tallies the remaining font sizes and ranks them into
//!    a [`SizeRankOrder`].
//! 3. [`detect_title`] reads the rank-0 size on page 1.
//! 4. [`classify_spans`] maps ranks 0–2 to H1–H3.
//!
//! [`OutlinePipeline`] runs all four.

mod classify;
mod normalize;
mod options;
mod pipeline;
mod ranking;
mod title;

pub use classify::classify_spans;
pub use normalize::SpanNormalizer;
pub use options::OutlineOptions;
pub use pipeline::OutlinePipeline;
pub use ranking::{SizeHistogram, SizeRankOrder};
pub use title::detect_title;
