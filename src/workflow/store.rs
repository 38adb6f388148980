use anyhow::Result;
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::errors::WorkflowError;
use crate::file_utils::FileManager;

use super::pending::translation_file_name;

// @module: Acceptance and storage of translated segments

/// Check that a submitted translation is a JSON object and pretty-print it.
///
/// Output uses 2-space indentation and keeps non-ASCII characters as-is.
pub fn normalize_translation(raw: &str) -> Result<String, WorkflowError> {
    let value: Value = serde_json::from_str(raw.trim())
        .map_err(|e| WorkflowError::InvalidTranslation(e.to_string()))?;

    if !value.is_object() {
        return Err(WorkflowError::InvalidTranslation(
            "expected a JSON object at the top level".to_string(),
        ));
    }

    serde_json::to_string_pretty(&value)
        .map_err(|e| WorkflowError::InvalidTranslation(e.to_string()))
}

/// Validate and write the translation of segment `number`.
///
/// Nothing is written when the JSON is invalid.
pub fn save_translation<P: AsRef<Path>>(
    translations_dir: P,
    prefix: &str,
    number: usize,
    raw: &str,
) -> Result<PathBuf> {
    let formatted = normalize_translation(raw)?;
    let path = translations_dir
        .as_ref()
        .join(translation_file_name(prefix, number));

    FileManager::write_to_file(&path, &formatted)?;
    Ok(path)
}
