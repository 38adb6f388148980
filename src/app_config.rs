use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::SplitError;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and overriding configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Splitting settings
    #[serde(default)]
    pub splitter: SplitterConfig,

    /// Translation workflow settings
    #[serde(default)]
    pub workflow: WorkflowConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Settings for the PDF splitting run
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SplitterConfig {
    /// Maximum characters per output file (soft cap, blocks are never split)
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,

    /// Directory receiving the segment files
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            max_chars: default_max_chars(),
            output_dir: default_output_dir(),
        }
    }
}

/// Settings for the segment-by-segment translation workflow
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WorkflowConfig {
    /// Directory holding the `<prefix>_<n>.txt` segment files
    #[serde(default = "default_segments_dir")]
    pub segments_dir: String,

    /// Directory receiving the accepted translations
    #[serde(default = "default_translations_dir")]
    pub translations_dir: String,

    /// Segment file prefix, usually the PDF stem (e.g. "Marcos").
    /// Empty means infer it from the segment files found.
    #[serde(default)]
    pub segment_prefix: String,

    /// Instructional prompt shown with every segment
    #[serde(default = "default_prompt_file")]
    pub prompt_file: String,

    /// Worked example of the expected JSON output
    #[serde(default = "default_example_file")]
    pub example_file: String,

    /// Expected number of segments; defaults to the number of files found
    #[serde(default)]
    pub total_expected: Option<usize>,

    /// Snapshot the translations every N accepted items (0 disables)
    #[serde(default = "default_snapshot_batch_size")]
    pub snapshot_batch_size: usize,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            segments_dir: default_segments_dir(),
            translations_dir: default_translations_dir(),
            segment_prefix: String::new(),
            prompt_file: default_prompt_file(),
            example_file: default_example_file(),
            total_expected: None,
            snapshot_batch_size: default_snapshot_batch_size(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching log crate filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_max_chars() -> usize {
    crate::commentary::DEFAULT_MAX_CHARS
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_segments_dir() -> String {
    "output".to_string()
}

fn default_translations_dir() -> String {
    "traducoes".to_string()
}

fn default_prompt_file() -> String {
    "prompt_traducao.txt".to_string()
}

fn default_example_file() -> String {
    "bloco_001_traduzido.json".to_string()
}

fn default_snapshot_batch_size() -> usize {
    10
}

impl Config {
    /// Load the configuration from a JSON file, or defaults when it is absent
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Config::default());
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.splitter.max_chars == 0 {
            return Err(SplitError::InvalidMaxChars.into());
        }

        if self.splitter.output_dir.trim().is_empty() {
            return Err(anyhow!("Output directory must not be empty"));
        }

        if self.workflow.total_expected == Some(0) {
            return Err(anyhow!("Expected segment total must be greater than zero"));
        }

        Ok(())
    }
}
