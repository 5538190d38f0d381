//! Document text extraction
//!
//! The scanning core only ever consumes already-extracted UTF-8 text.
//! This module handles the plain-text family directly; image formats are
//! recognized but rejected with a distinguished error, because OCR lives
//! in an external front end, not in this core.

use crate::domain::errors::ExtractionError;
use std::path::Path;

/// File extensions read as plain text
const TEXT_SUFFIXES: [&str; 4] = ["txt", "md", "csv", "log"];

/// Image extensions recognized but not handled here
const IMAGE_SUFFIXES: [&str; 6] = ["png", "jpg", "jpeg", "bmp", "tiff", "webp"];

/// Read a supported document and return its text
///
/// Text files are decoded lossily so byte-garbage inside an otherwise
/// readable file degrades to replacement characters instead of failing
/// the whole scan.
///
/// # Errors
///
/// - [`ExtractionError::NotFound`] when the path does not exist
/// - [`ExtractionError::NotAFile`] for directories and other non-files
/// - [`ExtractionError::UnsupportedType`] for image and unknown suffixes
/// - [`ExtractionError::ReadFailed`] when the read itself fails
pub fn read_document_text(path: &Path) -> Result<String, ExtractionError> {
    if !path.exists() {
        return Err(ExtractionError::NotFound(path.display().to_string()));
    }
    if !path.is_file() {
        return Err(ExtractionError::NotAFile(path.display().to_string()));
    }

    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    if TEXT_SUFFIXES.contains(&extension.as_str()) {
        let bytes = std::fs::read(path).map_err(|e| ExtractionError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        return Ok(String::from_utf8_lossy(&bytes).into_owned());
    }

    if IMAGE_SUFFIXES.contains(&extension.as_str()) {
        return Err(ExtractionError::UnsupportedType {
            extension,
            message: "image extraction requires an OCR front end; pass extracted text instead"
                .to_string(),
        });
    }

    Err(ExtractionError::UnsupportedType {
        extension,
        message: format!(
            "use text files ({}) or pre-extracted text",
            TEXT_SUFFIXES.join(", ")
        ),
    })
}
