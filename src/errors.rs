/*!
 * Error types for the versesplit application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a split run
#[derive(Error, Debug)]
pub enum SplitError {
    /// The input document does not exist
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The input document is not a PDF
    #[error("Input file must be a PDF: {}", .0.display())]
    NotPdf(PathBuf),

    /// The PDF could not be read or decoded
    #[error("Failed to extract text from {}: {message}", .path.display())]
    Extraction {
        /// Document that failed
        path: PathBuf,
        /// Reason reported by the extractor
        message: String,
    },

    /// Nothing left to write once administrative blocks are removed
    #[error("No valid blocks found after filtering")]
    NoBlocks,

    /// The per-file character limit is not positive
    #[error("Maximum characters per file must be greater than zero")]
    InvalidMaxChars,
}

/// Errors from the translation workflow
#[derive(Error, Debug)]
pub enum WorkflowError {
    /// Prompt or example file is missing
    #[error("Context file not found: {}", .0.display())]
    ContextFileMissing(PathBuf),

    /// Submitted translation is not a JSON object
    #[error("Invalid translation JSON: {0}")]
    InvalidTranslation(String),

    /// Item number outside 1..=total
    #[error("Item number {number} is out of range (1..={total})")]
    ItemOutOfRange {
        /// Requested item
        number: usize,
        /// Configured total
        total: usize,
    },

    /// Version-control snapshot failed
    #[error("Snapshot failed: {0}")]
    SnapshotFailed(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the split pipeline
    #[error("Split error: {0}")]
    Split(#[from] SplitError),

    /// Error from the translation workflow
    #[error("Workflow error: {0}")]
    Workflow(#[from] WorkflowError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
