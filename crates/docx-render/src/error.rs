//! Error types for document rendering

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("document XML generation failed: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("package assembly failed: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("package I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
