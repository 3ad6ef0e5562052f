//! Rendering of [`DocumentText`] into a `.docx` binary
//!
//! A docx file is a zip package of XML parts. Only `word/document.xml`
//! depends on the input; the remaining parts (content types,
//! relationships, style defaults) are fixed. The renderer knows nothing
//! about mandates; it maps paragraphs with alignment/bold/size/indent
//! attributes to WordprocessingML and packs the result.

mod error;
mod package;
mod xml;

pub use error::RenderError;

use poa_core::document::DocumentText;

/// MIME type of the produced artifact.
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Render an ordered paragraph sequence into `.docx` bytes.
pub fn render_docx(doc: &DocumentText) -> Result<Vec<u8>, RenderError> {
    let document_xml = xml::document_xml(doc)?;
    package::pack(&document_xml)
}
