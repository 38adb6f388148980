use anyhow::Result;
use log::info;
use std::path::{Path, PathBuf};

use crate::commentary::Group;
use crate::file_utils::FileManager;

// @module: Writing groups to numbered segment files

/// Separator placed between blocks inside one segment file
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Statistics about one written segment file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenSegment {
    /// Full path of the file
    pub path: PathBuf,
    /// Number of blocks in the file
    pub blocks: usize,
    /// Characters written, separators included
    pub chars: usize,
    /// Reference of the first block
    pub first_reference: String,
    /// Reference of the last block
    pub last_reference: String,
}

/// Name of the `index`-th (1-based) segment file for `base`
pub fn segment_file_name(base: &str, index: usize) -> String {
    format!("{}_{}.txt", base, index)
}

/// Join the block contents of a group into the file body
pub fn render_group(group: &Group) -> String {
    group
        .blocks()
        .iter()
        .map(|block| block.content.as_str())
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

/// Write one UTF-8 file per group, named `<base>_<i>.txt` for i = 1..=N
pub fn write_segments<P: AsRef<Path>>(
    groups: &[Group],
    base: &str,
    output_dir: P,
) -> Result<Vec<WrittenSegment>> {
    let output_dir = output_dir.as_ref();
    FileManager::ensure_dir(output_dir)?;

    let mut written = Vec::with_capacity(groups.len());
    for (i, group) in groups.iter().enumerate() {
        let file_name = segment_file_name(base, i + 1);
        let path = output_dir.join(&file_name);
        let body = render_group(group);

        FileManager::write_to_file(&path, &body)?;

        let segment = WrittenSegment {
            path,
            blocks: group.len(),
            chars: body.chars().count(),
            first_reference: group.first_reference().to_string(),
            last_reference: group.last_reference().to_string(),
        };

        info!("✓ Created: {}", file_name);
        info!("  - Blocks: {}", segment.blocks);
        info!("  - Characters: {}", segment.chars);
        info!(
            "  - References: {} to {}",
            segment.first_reference, segment.last_reference
        );

        written.push(segment);
    }

    Ok(written)
}
