//! Text extraction from input documents.
//!
//! [`try_extract`] dispatches on the file suffix; [`extract_text`] wraps it
//! so a bad file never stops a run: the error is reported on the given
//! writer and the file contributes no text.

mod docx;
mod pdf;
mod text;

use crate::models::DocumentKind;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("DOCX package error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("DOCX XML error: {0}")]
    Xml(#[from] quick_xml::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;

/// Extract the text of one document, failing on any error.
pub fn try_extract(path: &Path) -> Result<String> {
    let kind = DocumentKind::from_path(path).ok_or_else(|| ExtractError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let text = match kind {
        DocumentKind::Pdf => pdf::extract(path)?,
        DocumentKind::Text => text::extract(path)?,
        DocumentKind::Docx => docx::extract(path)?,
    };

    debug!(
        "Extracted {} chars from {} ({})",
        text.chars().count(),
        path.display(),
        kind
    );
    Ok(text)
}

/// Extract the text of one document, or `""` if anything goes wrong.
///
/// Extraction failures are written to `out`; only a failed write is an error.
pub fn extract_text<W: Write>(path: &Path, out: &mut W) -> io::Result<String> {
    match try_extract(path) {
        Ok(text) => Ok(text),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "extraction failed");
            writeln!(out, "Error extracting data from {}: {}", path.display(), err)?;
            Ok(String::new())
        }
    }
}
