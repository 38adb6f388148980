use log::debug;
use std::path::PathBuf;
use std::process::Command;

use crate::errors::WorkflowError;

// @module: Periodic snapshots of accepted translations

/// Called after every `batch_size` accepted items with the item range covered
pub trait SnapshotHook {
    /// Snapshot items `first..=last`
    fn snapshot(&mut self, first: usize, last: usize) -> Result<String, WorkflowError>;
}

/// Decides when a snapshot is due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotPolicy {
    batch_size: usize,
}

impl SnapshotPolicy {
    /// Snapshot every `batch_size` items; 0 disables snapshots
    pub fn every(batch_size: usize) -> Self {
        Self { batch_size }
    }

    /// Item range to snapshot once `number` has been accepted, if any
    pub fn due_range(&self, number: usize) -> Option<(usize, usize)> {
        if self.batch_size == 0 || number == 0 || number % self.batch_size != 0 {
            return None;
        }
        Some((number + 1 - self.batch_size, number))
    }
}

/// Commits the translations directory with git
#[derive(Debug, Clone)]
pub struct GitSnapshot {
    // @field: Path passed to `git add`
    add_path: PathBuf,
    // @field: Label used in commit messages
    label: String,
}

impl GitSnapshot {
    pub fn new(add_path: impl Into<PathBuf>, label: impl Into<String>) -> Self {
        Self {
            add_path: add_path.into(),
            label: label.into(),
        }
    }

    /// Commit message for items `first..=last`
    pub fn commit_message(&self, first: usize, last: usize) -> String {
        format!(
            "Add translations of {} - items {:03} to {:03}",
            self.label, first, last
        )
    }

    fn git(args: &[&str]) -> Result<(), WorkflowError> {
        let output = Command::new("git")
            .args(args)
            .output()
            .map_err(|e| WorkflowError::SnapshotFailed(format!("failed to run git: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(WorkflowError::SnapshotFailed(format!(
                "git {} failed: {}",
                args.first().unwrap_or(&""),
                stderr.trim()
            )));
        }
        Ok(())
    }
}

impl SnapshotHook for GitSnapshot {
    fn snapshot(&mut self, first: usize, last: usize) -> Result<String, WorkflowError> {
        let message = self.commit_message(first, last);
        let add_path = self.add_path.to_string_lossy().to_string();

        debug!("git add {}", add_path);
        Self::git(&["add", &add_path])?;
        Self::git(&["commit", "-m", &message])?;

        Ok(message)
    }
}
