//! Paragraph-level document model
//!
//! The assembler produces an ordered list of paragraphs with the small
//! set of formatting attributes the mandate needs; the renderer turns
//! them into an OOXML package without knowing anything about mandates.

use serde::{Deserialize, Serialize};

/// Default body font carried through to the renderer's style defaults.
pub const DEFAULT_FONT: &str = "Times New Roman";
/// Default body font size in points.
pub const DEFAULT_FONT_SIZE_PT: u32 = 11;

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Left,
    Right,
    Center,
    Justified,
}

/// One paragraph of the output document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
    pub alignment: Alignment,
    pub bold: bool,
    /// Overrides the document default when set.
    pub font_size_pt: Option<u32>,
    /// Left indent in centimeters.
    pub indent_cm: Option<f32>,
}

impl Paragraph {
    pub fn text(text: impl Into<String>) -> Self {
        Paragraph {
            text: text.into(),
            ..Paragraph::default()
        }
    }

    /// Empty spacer paragraph.
    pub fn blank() -> Self {
        Paragraph::default()
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn size(mut self, pt: u32) -> Self {
        self.font_size_pt = Some(pt);
        self
    }

    pub fn indent(mut self, cm: f32) -> Self {
        self.indent_cm = Some(cm);
        self
    }
}

/// Ordered paragraph sequence; immutable once assembled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentText {
    pub paragraphs: Vec<Paragraph>,
}

impl DocumentText {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        DocumentText { paragraphs }
    }

    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Paragraph> {
        self.paragraphs.iter()
    }

    /// Concatenated text content, paragraphs joined with newlines.
    /// Handy for content assertions without unpacking the binary output.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builder_sets_attributes() {
        let p = Paragraph::text("PEŁNOMOCNICTWO")
            .align(Alignment::Center)
            .bold()
            .size(14);

        assert_eq!(p.text, "PEŁNOMOCNICTWO");
        assert_eq!(p.alignment, Alignment::Center);
        assert!(p.bold);
        assert_eq!(p.font_size_pt, Some(14));
        assert_eq!(p.indent_cm, None);
    }

    #[test]
    fn blank_paragraph_is_default() {
        assert_eq!(Paragraph::blank(), Paragraph::default());
    }

    #[test]
    fn plain_text_joins_paragraphs() {
        let doc = DocumentText::new(vec![Paragraph::text("a"), Paragraph::text("b")]);
        assert_eq!(doc.plain_text(), "a\nb");
        assert_eq!(doc.len(), 2);
    }
}
