//! PDF lineups - text extraction only
//!
//! This is not a channel parser yet. It returns the trimmed, non-blank
//! text lines of the document and leaves record structure to a future
//! layout-aware parser. Extraction needs the `pdf` cargo feature; without
//! it every call fails with [`Error::MissingCapability`].

use std::path::Path;

use crate::{Error, Result};

/// Raw text lines of a PDF document.
///
/// # Errors
/// `MissingCapability` when built without the `pdf` feature, `Io` when the
/// file cannot be read and `Document` when the bytes are not a usable PDF.
#[cfg(feature = "pdf")]
pub fn extract_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| Error::Document {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    // TODO: parse channel blocks out of the page layout instead of raw lines
    Ok(super::clean_lines(&text).map(str::to_string).collect())
}

#[cfg(not(feature = "pdf"))]
pub fn extract_lines(path: &Path) -> Result<Vec<String>> {
    tracing::debug!(path = %path.display(), "pdf extraction requested without the pdf feature");
    Err(Error::MissingCapability {
        capability: "PDF text extraction",
        remedy: "rebuild with `--features pdf` to enable it",
    })
}
