//! Table-of-Contents Style Hints
//!
//! Presentation attributes returned by the style-hint collaborator (font,
//! indents). Purely cosmetic: these values feed the HTML render and are
//! never part of the outline's structural invariants.

use serde::{Deserialize, Serialize};

/// Cosmetic attributes applied when rendering an outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TocStyleHints {
    /// Font family applied to headings
    pub font_family: String,

    /// Base font size in points
    pub font_size_pt: f32,

    /// Horizontal indent per outline level, in `em`
    pub indent_em_per_level: f32,
}

impl TocStyleHints {
    /// Indent for a heading at `level`, in `em`. Top-level sections sit
    /// flush left.
    pub fn indent_em(&self, level: u32) -> f32 {
        level.saturating_sub(1) as f32 * self.indent_em_per_level
    }
}

impl Default for TocStyleHints {
    fn default() -> Self {
        Self {
            font_family: "Calibri".to_string(),
            font_size_pt: 11.0,
            indent_em_per_level: 1.5,
        }
    }
}
