/*!
 * # versesplit - verse-by-verse commentary splitter
 *
 * A Rust library for cutting patristic commentary PDFs into translation-sized
 * segment files without ever splitting a verse block.
 *
 * ## Features
 *
 * - Extract the text of a commentary PDF
 * - Detect the commented book from its first `<book> <chapter>:<verse>` reference
 * - Segment the text into one block per verse reference
 * - Drop general description/introduction blocks
 * - Pack blocks into files bounded by a character limit
 * - Walk through the segment files one by one for translation
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `commentary`: Book detection, segmentation, filtering and grouping:
 *   - `commentary::detector`: Book-name detection
 *   - `commentary::segmenter`: Reference-delimited blocks
 *   - `commentary::filter`: Administrative block filtering
 *   - `commentary::grouper`: Size-bounded grouping
 * - `segment_writer`: Numbered segment files
 * - `pdf_text`: PDF text extraction
 * - `workflow`: Segment-by-segment translation workflow
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod commentary;
pub mod errors;
pub mod file_utils;
pub mod pdf_text;
pub mod segment_writer;
pub mod workflow;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, SplitReport};
pub use commentary::{Block, Group, SplitOutcome};
pub use errors::{AppError, SplitError, WorkflowError};
pub use workflow::TranslationWorkflow;
