use std::fs;
use std::path::Path;

use log::debug;

use crate::errors::SplitError;

// @module: PDF text extraction

/// Source of the linear text of a document.
///
/// The splitter only ever sees the returned string; page layout, columns and
/// hyphenation are whatever the extractor produces.
pub trait TextExtractor {
    /// Extract the text of every page, concatenated in page order
    fn extract(&self, path: &Path) -> Result<String, SplitError>;
}

/// Extractor backed by the `pdf-extract` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<String, SplitError> {
        let bytes = fs::read(path).map_err(|e| SplitError::Extraction {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        debug!("Read {} bytes from {:?}", bytes.len(), path);

        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| SplitError::Extraction {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
