//! Positioned, styled text runs.

use serde::{Deserialize, Serialize};

/// A font size rounded to one decimal place.
///
/// Stored as an integer number of tenths of a point so that two spans set
/// at "the same" size compare, hash and sort exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct FontSize(u32);

impl FontSize {
    /// Round a size in points to one decimal place.
    pub fn from_points(points: f32) -> Self {
        if !points.is_finite() {
            return Self(0);
        }
        Self((points.abs() * 10.0).round() as u32)
    }

    /// Build a size directly from tenths of a point.
    pub const fn from_tenths(tenths: u32) -> Self {
        Self(tenths)
    }

    /// The size in points.
    pub fn points(self) -> f32 {
        self.0 as f32 / 10.0
    }

    /// The size in tenths of a point.
    pub fn tenths(self) -> u32 {
        self.0
    }
}

impl From<f32> for FontSize {
    fn from(points: f32) -> Self {
        Self::from_points(points)
    }
}

impl From<FontSize> for f32 {
    fn from(size: FontSize) -> Self {
        size.points()
    }
}

impl std::fmt::Display for FontSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

/// Style bitmask for a text span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleFlags(u32);

impl StyleFlags {
    pub const SUPERSCRIPT: StyleFlags = StyleFlags(1);
    pub const ITALIC: StyleFlags = StyleFlags(1 << 1);
    pub const SERIF: StyleFlags = StyleFlags(1 << 2);
    pub const MONOSPACE: StyleFlags = StyleFlags(1 << 3);
    pub const BOLD: StyleFlags = StyleFlags(1 << 4);

    /// No style bits set.
    pub const fn empty() -> Self {
        StyleFlags(0)
    }

    /// Raw bit value.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Build flags from a raw bit value.
    pub const fn from_bits(bits: u32) -> Self {
        StyleFlags(bits)
    }

    /// Whether every bit of `other` is set.
    pub const fn contains(self, other: StyleFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Infer style bits from a PDF base font name such as `Times-BoldItalic`.
    pub fn from_font_name(font_name: &str) -> Self {
        let name = font_name.to_lowercase();
        let mut flags = StyleFlags::empty();

        if name.contains("bold") || name.contains("black") || name.contains("heavy") {
            flags |= StyleFlags::BOLD;
        }
        if name.contains("italic") || name.contains("oblique") {
            flags |= StyleFlags::ITALIC;
        }
        if name.contains("courier") || name.contains("mono") || name.contains("consol") {
            flags |= StyleFlags::MONOSPACE;
        }
        if name.contains("times") || (name.contains("serif") && !name.contains("sans")) {
            flags |= StyleFlags::SERIF;
        }

        flags
    }
}

impl std::ops::BitOr for StyleFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        StyleFlags(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for StyleFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Axis-aligned box in page space, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl BoundingBox {
    /// Create a bounding box from its corners.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }
}

/// One contiguous run of uniformly styled text.
///
/// Spans are produced by the extractor in content-stream order and are not
/// modified afterwards, except that normalization replaces the text with its
/// trimmed form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSpan {
    /// The text content
    pub text: String,
    /// 1-indexed page number
    pub page: u32,
    /// Base font name (e.g., "Helvetica-Bold")
    pub font: String,
    /// Rounded font size
    pub size: FontSize,
    /// Style bits
    pub flags: StyleFlags,
    /// Position on the page
    pub bbox: BoundingBox,
}

impl TextSpan {
    /// Create a span with flags inferred from the font name and an empty box.
    pub fn new(text: impl Into<String>, page: u32, font: impl Into<String>, size: f32) -> Self {
        let font = font.into();
        Self {
            text: text.into(),
            page,
            flags: StyleFlags::from_font_name(&font),
            font,
            size: FontSize::from_points(size),
            bbox: BoundingBox::default(),
        }
    }

    /// Replace the style bits.
    pub fn with_flags(mut self, flags: StyleFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Set the bounding box.
    pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = bbox;
        self
    }

    /// Number of whitespace-separated words.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Number of characters (Unicode scalar values).
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_bold(&self) -> bool {
        self.flags.contains(StyleFlags::BOLD)
    }

    pub fn is_italic(&self) -> bool {
        self.flags.contains(StyleFlags::ITALIC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_size_rounding() {
        assert_eq!(FontSize::from_points(11.96), FontSize::from_points(12.0));
        assert_eq!(FontSize::from_points(12.04).tenths(), 120);
        assert_eq!(FontSize::from_points(12.06).tenths(), 121);
        assert_eq!(FontSize::from_points(-9.0).tenths(), 90);
        assert_eq!(FontSize::from_points(f32::NAN).tenths(), 0);
        assert_eq!(FontSize::from_points(10.5).to_string(), "10.5");
    }

    #[test]
    fn test_font_size_serializes_as_points() {
        let json = serde_json::to_string(&FontSize::from_points(24.0)).unwrap();
        assert_eq!(json, "24.0");
        let back: FontSize = serde_json::from_str("13.5").unwrap();
        assert_eq!(back.tenths(), 135);
    }

    #[test]
    fn test_style_flags_from_font_name() {
        let span = TextSpan::new("Test", 1, "Helvetica-Bold", 12.0);
        assert!(span.is_bold());
        assert!(!span.is_italic());

        let span = TextSpan::new("Test", 1, "Helvetica-Oblique", 12.0);
        assert!(!span.is_bold());
        assert!(span.is_italic());

        let flags = StyleFlags::from_font_name("Times-BoldItalic");
        assert!(flags.contains(StyleFlags::BOLD | StyleFlags::ITALIC | StyleFlags::SERIF));
        assert_eq!(flags.bits(), 2 | 4 | 16);

        assert!(StyleFlags::from_font_name("Courier").contains(StyleFlags::MONOSPACE));
        assert!(!StyleFlags::from_font_name("DejaVuSans").contains(StyleFlags::SERIF));
    }

    #[test]
    fn test_word_and_char_counts() {
        let span = TextSpan::new("  Über   die Brücke ", 1, "Helvetica", 12.0);
        assert_eq!(span.word_count(), 3);
        assert_eq!(span.char_count(), 20);
    }
}
