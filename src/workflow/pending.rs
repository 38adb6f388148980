use anyhow::Result;
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::file_utils::FileManager;

// @module: Discovery of segment files awaiting translation

// @const: `<prefix>_<n>.txt`
static SEGMENT_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+)_(\d+)\.txt$").unwrap()
});

/// One segment file and where its translation goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentFile {
    /// 1-based segment number taken from the file name
    pub number: usize,
    /// Path of the segment text
    pub path: PathBuf,
    /// File name of the translation for this segment
    pub translation_name: String,
}

/// Translation file name for segment `number`, e.g. `marcos_007_traduzido.json`
pub fn translation_file_name(prefix: &str, number: usize) -> String {
    format!("{}_{:03}_traduzido.json", prefix.to_lowercase(), number)
}

/// Parse `<prefix>_<n>.txt` into (prefix, n)
pub fn parse_segment_name(file_name: &str) -> Option<(String, usize)> {
    let caps = SEGMENT_NAME_REGEX.captures(file_name)?;
    let number = caps[2].parse().ok()?;
    Some((caps[1].to_string(), number))
}

/// Guess the segment prefix from the files in `segments_dir`.
///
/// Uses the first file in name order; other prefixes are reported and ignored.
pub fn infer_prefix<P: AsRef<Path>>(segments_dir: P) -> Result<Option<String>> {
    let mut prefixes: Vec<String> = FileManager::find_files(segments_dir, "txt")?
        .iter()
        .filter_map(|path| path.file_name().map(|n| n.to_string_lossy().to_string()))
        .filter_map(|name| parse_segment_name(&name).map(|(prefix, _)| prefix))
        .collect();
    prefixes.dedup();

    if prefixes.len() > 1 {
        warn!(
            "Several segment prefixes found ({}), using '{}'",
            prefixes.join(", "),
            prefixes[0]
        );
    }

    Ok(prefixes.into_iter().next())
}

/// All `<prefix>_<n>.txt` files in `segments_dir`, ordered by n
pub fn list_segments<P: AsRef<Path>>(segments_dir: P, prefix: &str) -> Result<Vec<SegmentFile>> {
    let mut segments: Vec<SegmentFile> = FileManager::find_files(segments_dir, "txt")?
        .into_iter()
        .filter_map(|path| {
            let name = path.file_name()?.to_string_lossy().to_string();
            let (file_prefix, number) = parse_segment_name(&name)?;
            (file_prefix == prefix).then(|| SegmentFile {
                number,
                path,
                translation_name: translation_file_name(prefix, number),
            })
        })
        .collect();

    segments.sort_by_key(|segment| segment.number);
    Ok(segments)
}

/// Segments whose translation file does not exist yet, ordered by number
pub fn list_pending<P1: AsRef<Path>, P2: AsRef<Path>>(
    segments_dir: P1,
    translations_dir: P2,
    prefix: &str,
) -> Result<Vec<SegmentFile>> {
    let translations_dir = translations_dir.as_ref();
    let existing: HashSet<String> = if FileManager::dir_exists(translations_dir) {
        FileManager::find_files(translations_dir, "json")?
            .iter()
            .filter_map(|path| path.file_name().map(|n| n.to_string_lossy().to_string()))
            .collect()
    } else {
        HashSet::new()
    };

    let pending: Vec<SegmentFile> = list_segments(segments_dir, prefix)?
        .into_iter()
        .filter(|segment| !existing.contains(&segment.translation_name))
        .collect();

    debug!("{} pending segment(s), {} translation(s) on disk", pending.len(), existing.len());
    Ok(pending)
}
