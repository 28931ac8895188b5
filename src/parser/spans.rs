//! Text span extraction from page content streams.
//!
//! Walks the text operators of a page (`BT`/`ET`, `Tf`, `Td`/`TD`/`Tm`/`T*`,
//! `TL`, `Tj`/`TJ`/`'`/`"`) and emits one [`TextSpan`] per text-showing
//! operation, with the effective font size and an estimated bounding box.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::model::{BoundingBox, TextSpan};

use super::backend::{decode_text_simple, ContentOp, PageId, PdfBackend, PdfValue};

/// TJ adjustments beyond this many thousandths of an em read as a word gap.
const TJ_SPACE_THRESHOLD: f32 = 200.0;

/// Average glyph advance as a fraction of the font size.
const AVG_GLYPH_WIDTH: f32 = 0.5;

/// Extracts positioned spans from the pages of a document.
pub struct SpanExtractor<'a, B: PdfBackend> {
    backend: &'a B,
}

impl<'a, B: PdfBackend> SpanExtractor<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// Extract the spans of one page in content-stream order.
    pub fn extract_page(&self, page_num: u32, page_id: PageId) -> Result<Vec<TextSpan>> {
        let fonts = self.backend.page_fonts(page_id)?;
        let operations = self.backend.page_operations(page_id)?;
        let (_, page_height) = self.backend.page_size(page_id);

        let mut walker = PageWalker {
            backend: self.backend,
            page_id,
            page_num,
            page_height,
            fonts: &fonts,
            state: TextState::default(),
            spans: Vec::new(),
        };
        for op in &operations {
            walker.apply(op);
        }

        log::debug!("page {}: extracted {} spans", page_num, walker.spans.len());
        Ok(walker.spans)
    }
}

/// Mutable interpreter state for one page.
struct PageWalker<'a, B: PdfBackend> {
    backend: &'a B,
    page_id: PageId,
    page_num: u32,
    page_height: f32,
    fonts: &'a BTreeMap<Vec<u8>, String>,
    state: TextState,
    spans: Vec<TextSpan>,
}

impl<B: PdfBackend> PageWalker<'_, B> {
    fn apply(&mut self, op: &ContentOp) {
        match op.operator.as_str() {
            "BT" => {
                self.state.in_text_block = true;
                self.state.matrix = TextMatrix::default();
            }
            "ET" => {
                self.state.in_text_block = false;
            }
            "Tf" => {
                if op.operands.len() >= 2 {
                    if let PdfValue::Name(name) = &op.operands[0] {
                        self.state.font_resource = name.clone();
                    }
                    self.state.font_size = op.number(1, 12.0);
                }
            }
            "TL" => {
                self.state.leading = op.number(0, 0.0);
            }
            "Td" => {
                if op.operands.len() >= 2 {
                    self.state.matrix.translate(op.number(0, 0.0), op.number(1, 0.0));
                }
            }
            "TD" => {
                if op.operands.len() >= 2 {
                    let ty = op.number(1, 0.0);
                    self.state.leading = -ty;
                    self.state.matrix.translate(op.number(0, 0.0), ty);
                }
            }
            "Tm" => {
                if op.operands.len() >= 6 {
                    self.state.matrix.set(
                        op.number(0, 1.0),
                        op.number(1, 0.0),
                        op.number(2, 0.0),
                        op.number(3, 1.0),
                        op.number(4, 0.0),
                        op.number(5, 0.0),
                    );
                }
            }
            "T*" => {
                self.state.next_line();
            }
            "Tj" => {
                if let Some(PdfValue::Str(bytes)) = op.operands.first() {
                    let text = self.decode(bytes);
                    self.emit(text);
                }
            }
            "TJ" => {
                if let Some(PdfValue::Array(items)) = op.operands.first() {
                    let text = self.decode_array(items);
                    self.emit(text);
                }
            }
            "'" | "\"" => {
                self.state.next_line();
                let text_idx = if op.operator == "\"" { 2 } else { 0 };
                if let Some(PdfValue::Str(bytes)) = op.operands.get(text_idx) {
                    let text = self.decode(bytes);
                    self.emit(text);
                }
            }
            _ => {}
        }
    }

    fn decode(&self, bytes: &[u8]) -> String {
        if self.state.font_resource.is_empty() {
            return decode_text_simple(bytes);
        }
        self.backend
            .decode_text(self.page_id, &self.state.font_resource, bytes)
    }

    /// Join the strings of a TJ array, turning large negative kerning into spaces.
    fn decode_array(&self, items: &[PdfValue]) -> String {
        let mut combined = String::new();

        for item in items {
            match item {
                PdfValue::Str(bytes) => combined.push_str(&self.decode(bytes)),
                PdfValue::Integer(_) | PdfValue::Real(_) => {
                    let adjustment = -item.as_number().unwrap_or(0.0);
                    if adjustment > TJ_SPACE_THRESHOLD {
                        push_word_gap(&mut combined);
                    }
                }
                _ => {}
            }
        }

        combined
    }

    fn emit(&mut self, text: String) {
        if !self.state.in_text_block || text.trim().is_empty() {
            return;
        }

        let size = self.state.font_size * self.state.matrix.scale();
        let (x, baseline) = self.state.matrix.position();
        let width = text.chars().count() as f32 * size.abs() * AVG_GLYPH_WIDTH;

        // PDF space is y-up; boxes are reported from the top-left corner.
        let top = baseline + size.abs() * 0.8;
        let bottom = baseline - size.abs() * 0.2;
        let bbox = BoundingBox::new(
            x,
            self.page_height - top,
            x + width,
            self.page_height - bottom,
        );

        let font = match self.fonts.get(&self.state.font_resource) {
            Some(base_font) => base_font.clone(),
            None => String::from_utf8_lossy(&self.state.font_resource).to_string(),
        };

        self.state
            .matrix
            .advance(text.chars().count() as f32 * self.state.font_size * AVG_GLYPH_WIDTH);
        self.spans
            .push(TextSpan::new(text, self.page_num, font, size).with_bbox(bbox));
    }
}

/// Add a single space unless the text is empty, already ends in whitespace,
/// or ends in a script written without word spaces.
fn push_word_gap(text: &mut String) {
    match text.chars().last() {
        Some(c) if !c.is_whitespace() && !is_spaceless_script_char(c) => text.push(' '),
        _ => {}
    }
}

#[derive(Debug, Clone)]
struct TextState {
    in_text_block: bool,
    font_resource: Vec<u8>,
    font_size: f32,
    leading: f32,
    matrix: TextMatrix,
}

impl Default for TextState {
    fn default() -> Self {
        Self {
            in_text_block: false,
            font_resource: Vec::new(),
            font_size: 12.0,
            leading: 0.0,
            matrix: TextMatrix::default(),
        }
    }
}

impl TextState {
    fn next_line(&mut self) {
        // Without an explicit TL, assume single spacing at the current size.
        let leading = if self.leading != 0.0 {
            self.leading
        } else {
            self.font_size
        };
        self.matrix.translate(0.0, -leading);
    }
}

/// Text matrix; `line_e`/`line_f` hold the origin of the current line.
#[derive(Debug, Clone, Copy)]
struct TextMatrix {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32,
    f: f32,
    line_e: f32,
    line_f: f32,
}

impl Default for TextMatrix {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
            line_e: 0.0,
            line_f: 0.0,
        }
    }
}

impl TextMatrix {
    fn set(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) {
        *self = Self {
            a,
            b,
            c,
            d,
            e,
            f,
            line_e: e,
            line_f: f,
        };
    }

    /// Move relative to the start of the current line (`Td`).
    fn translate(&mut self, tx: f32, ty: f32) {
        self.line_e += tx * self.a + ty * self.c;
        self.line_f += tx * self.b + ty * self.d;
        self.e = self.line_e;
        self.f = self.line_f;
    }

    /// Advance past shown glyphs without starting a new line.
    fn advance(&mut self, tx: f32) {
        self.e += tx * self.a;
        self.f += tx * self.b;
    }

    fn position(&self) -> (f32, f32) {
        (self.e, self.f)
    }

    fn scale(&self) -> f32 {
        (self.a * self.a + self.c * self.c).sqrt()
    }
}

/// Scripts written without spaces between words (Han, Hiragana, Katakana
/// and CJK punctuation). Hangul uses spaces and is not included.
fn is_spaceless_script_char(c: char) -> bool {
    matches!(
        c as u32,
        0x4E00..=0x9FFF
            | 0x3400..=0x4DBF
            | 0x20000..=0x2A6DF
            | 0x2A700..=0x2EBEF
            | 0x3040..=0x309F
            | 0x30A0..=0x30FF
            | 0x3000..=0x303F
    )
}
