use anyhow::Result;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::app_config::Config;
use crate::commentary::{group_blocks, partition_blocks, detect_book_name, split_into_blocks};
use crate::errors::SplitError;
use crate::file_utils::{FileManager, FileType};
use crate::pdf_text::{PdfExtractor, TextExtractor};
use crate::segment_writer::{write_segments, WrittenSegment};

// @module: Application controller for commentary splitting

/// Summary of a completed split run
#[derive(Debug, Clone)]
pub struct SplitReport {
    /// Detected book name
    pub book_name: String,
    /// Characters extracted from the PDF
    pub chars_extracted: usize,
    /// Blocks found before filtering
    pub blocks_found: usize,
    /// Administrative blocks dropped
    pub blocks_skipped: usize,
    /// Segment files written, in order
    pub segments: Vec<WrittenSegment>,
}

/// Main application controller for PDF splitting
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Text source for the input document
    extractor: Box<dyn TextExtractor>,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Self::with_extractor(config, Box::new(PdfExtractor))
    }

    /// Create a controller reading documents through a custom extractor
    pub fn with_extractor(config: Config, extractor: Box<dyn TextExtractor>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, extractor })
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Split one PDF into `<stem>_<i>.txt` files inside `output_dir`.
    ///
    /// Falls back to the configured output directory when none is given.
    pub fn run(&self, pdf_path: &Path, output_dir: Option<PathBuf>) -> Result<SplitReport> {
        let start_time = Instant::now();
        let output_dir =
            output_dir.unwrap_or_else(|| PathBuf::from(&self.config.splitter.output_dir));
        let max_chars = self.config.splitter.max_chars;

        Self::check_input(pdf_path)?;

        info!("Processing: {}", FileManager::file_stem(pdf_path));
        info!("{}", "=".repeat(60));

        info!("1. Extracting text from PDF...");
        let text = self.extractor.extract(pdf_path)?;
        let chars_extracted = text.chars().count();
        info!("   Total characters extracted: {}", chars_extracted);

        info!("2. Detecting book name...");
        let book_name = detect_book_name(&text);
        info!("   Detected book: '{}'", book_name);

        info!("3. Splitting into blocks...");
        let blocks = split_into_blocks(&text, &book_name);
        let blocks_found = blocks.len();
        info!("   Total blocks found: {}", blocks_found);

        info!("4. Filtering blocks...");
        let (kept, skipped) = partition_blocks(blocks);
        for block in &skipped {
            info!("   ✗ Skipped: {} (general description/introduction)", block.reference);
        }
        info!("   Blocks kept: {}", kept.len());
        info!("   Blocks skipped: {}", skipped.len());

        if kept.is_empty() {
            return Err(SplitError::NoBlocks.into());
        }

        info!("5. Grouping blocks (max ~{} characters)...", max_chars);
        let groups = group_blocks(kept, max_chars);
        let oversized = groups.iter().filter(|g| g.is_oversized(max_chars)).count();
        if oversized > 0 {
            warn!(
                "   {} block(s) exceed the limit on their own and get a file each",
                oversized
            );
        }
        info!("   Total files to create: {}", groups.len());

        info!("6. Saving files to '{}'...", output_dir.display());
        let base = FileManager::file_stem(pdf_path);
        let segments = write_segments(&groups, &base, &output_dir)?;

        info!("{}", "=".repeat(60));
        info!(
            "✓ Done: {} file(s) created in {:.1}s",
            segments.len(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(SplitReport {
            book_name,
            chars_extracted,
            blocks_found,
            blocks_skipped: skipped.len(),
            segments,
        })
    }

    // @validates: Input exists and is a PDF
    fn check_input(pdf_path: &Path) -> Result<(), SplitError> {
        if !FileManager::file_exists(pdf_path) {
            return Err(SplitError::InputNotFound(pdf_path.to_path_buf()));
        }

        if FileManager::detect_file_type(pdf_path) != FileType::Pdf {
            return Err(SplitError::NotPdf(pdf_path.to_path_buf()));
        }

        Ok(())
    }
}
