/*!
 * Segment-by-segment translation workflow.
 *
 * Drives the manual translation of the segment files produced by the
 * splitter: presents the next pending segment with its prompt and example,
 * accepts a translated JSON document for it, snapshots the translations
 * directory every N accepted items and reports progress against an
 * explicit expected total.
 *
 * - `pending`: segment discovery and translation file naming
 * - `presenter`: rendering of a segment and progress display
 * - `store`: JSON validation and storage
 * - `snapshot`: snapshot hook and batch policy
 */

use anyhow::{anyhow, Result};
use log::{info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::WorkflowConfig;
use crate::errors::WorkflowError;
use crate::file_utils::FileManager;

// Re-export main types for easier usage
pub use self::pending::{list_pending, list_segments, translation_file_name, SegmentFile};
pub use self::presenter::{Presentation, Progress};
pub use self::snapshot::{GitSnapshot, SnapshotHook, SnapshotPolicy};
pub use self::store::{normalize_translation, save_translation};

// Submodules
pub mod pending;
pub mod presenter;
pub mod snapshot;
pub mod store;

/// Result of accepting one translation
#[derive(Debug, Clone)]
pub struct AcceptOutcome {
    /// Where the translation was stored
    pub path: PathBuf,
    /// Progress after this item
    pub progress: Progress,
    /// Snapshot description when one was taken
    pub snapshot: Option<String>,
}

/// Orchestrates presentation and acceptance of segment translations
pub struct TranslationWorkflow {
    config: WorkflowConfig,
    prefix: String,
    policy: SnapshotPolicy,
    hook: Box<dyn SnapshotHook>,
}

impl TranslationWorkflow {
    /// Create a workflow with a custom snapshot hook
    pub fn new(config: WorkflowConfig, hook: Box<dyn SnapshotHook>) -> Result<Self> {
        let prefix = Self::resolve_prefix(&config)?;
        let policy = SnapshotPolicy::every(config.snapshot_batch_size);
        Ok(Self {
            config,
            prefix,
            policy,
            hook,
        })
    }

    /// Create a workflow that commits translations with git
    pub fn with_git(config: WorkflowConfig) -> Result<Self> {
        let prefix = Self::resolve_prefix(&config)?;
        let hook = GitSnapshot::new(&config.translations_dir, prefix.clone());
        Self::new(config, Box::new(hook))
    }

    // @returns: Configured prefix, or the one inferred from the segment files
    fn resolve_prefix(config: &WorkflowConfig) -> Result<String> {
        if !config.segment_prefix.is_empty() {
            return Ok(config.segment_prefix.clone());
        }

        if !FileManager::dir_exists(&config.segments_dir) {
            return Err(anyhow!("Segments directory not found: {}", config.segments_dir));
        }

        pending::infer_prefix(&config.segments_dir)?
            .ok_or_else(|| anyhow!("No segment files found in {}", config.segments_dir))
    }

    /// Segment prefix in use
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Expected number of segments
    pub fn total(&self) -> Result<usize> {
        match self.config.total_expected {
            Some(total) => Ok(total),
            None => Ok(list_segments(&self.config.segments_dir, &self.prefix)?.len()),
        }
    }

    /// Segments still waiting for a translation
    pub fn pending(&self) -> Result<Vec<SegmentFile>> {
        list_pending(
            &self.config.segments_dir,
            &self.config.translations_dir,
            &self.prefix,
        )
    }

    /// Current progress computed from the files on disk
    pub fn progress(&self) -> Result<Progress> {
        let segments = list_segments(&self.config.segments_dir, &self.prefix)?.len();
        let pending = self.pending()?.len();
        Ok(Progress::new(segments - pending, self.total()?))
    }

    fn read_context_file(path: &str) -> Result<String> {
        let path = Path::new(path);
        if !FileManager::file_exists(path) {
            return Err(WorkflowError::ContextFileMissing(path.to_path_buf()).into());
        }
        FileManager::read_to_string(path)
    }

    /// Build the presentation of the next pending segment, if any is left
    pub fn next_presentation(&self) -> Result<Option<Presentation>> {
        FileManager::ensure_dir(&self.config.translations_dir)?;

        let prompt = Self::read_context_file(&self.config.prompt_file)?;
        let example = Self::read_context_file(&self.config.example_file)?;

        let Some(next) = self.pending()?.into_iter().next() else {
            return Ok(None);
        };

        let content = FileManager::read_to_string(&next.path)?;
        let destination = Path::new(&self.config.translations_dir).join(&next.translation_name);

        Ok(Some(Presentation {
            number: next.number,
            total: self.total()?,
            source: next.path,
            destination,
            prompt,
            example,
            content,
        }))
    }

    /// Validate and store the translation of segment `number`.
    ///
    /// Runs the snapshot hook when a batch completes; a failing snapshot
    /// is reported and does not undo the acceptance.
    pub fn accept(&mut self, number: usize, raw_json: &str) -> Result<AcceptOutcome> {
        let total = self.total()?;
        if number == 0 || number > total {
            return Err(WorkflowError::ItemOutOfRange { number, total }.into());
        }

        let path = save_translation(&self.config.translations_dir, &self.prefix, number, raw_json)?;
        info!("✓ Translation saved: {}", path.display());

        let snapshot = match self.policy.due_range(number) {
            Some((first, last)) => {
                info!("Snapshotting translations {} to {}...", first, last);
                match self.hook.snapshot(first, last) {
                    Ok(description) => {
                        info!("✓ Snapshot taken: {}", description);
                        Some(description)
                    }
                    Err(e) => {
                        warn!("Snapshot skipped: {}", e);
                        None
                    }
                }
            }
            None => None,
        };

        Ok(AcceptOutcome {
            path,
            progress: self.progress()?,
            snapshot,
        })
    }
}
