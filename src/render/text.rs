//! Plain-text rendering of an outline, indented by heading level.

use crate::model::DocumentResult;

/// Render a result as an indented outline.
///
/// ```text
/// Annual Report 2024
///   1. Introduction (p. 1)
///     1.1 Scope (p. 2)
/// ```
pub fn to_text(result: &DocumentResult) -> String {
    let mut out = String::new();

    if let Some(title) = result.title() {
        out.push_str(title);
        out.push('\n');
    }

    for entry in result.entries() {
        let indent = "  ".repeat(entry.level.depth() as usize);
        out.push_str(&format!("{}{} (p. {})\n", indent, entry.text, entry.page));
    }

    out
}
