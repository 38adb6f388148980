use super::block::{Block, Group};
use super::detector::detect_book_name;
use super::filter::partition_blocks;
use super::grouper::group_blocks;
use super::segmenter::split_into_blocks;

// @module: Pure composition of detection, segmentation, filtering and grouping

/// Everything the splitting stages derive from one extracted text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOutcome {
    /// Detected book name (or the fallback)
    pub book_name: String,

    /// Number of blocks found before filtering
    pub blocks_found: usize,

    /// Administrative blocks that were dropped, in document order
    pub skipped: Vec<Block>,

    /// Size-bounded groups of the remaining blocks
    pub groups: Vec<Group>,
}

impl SplitOutcome {
    /// Number of commentary blocks kept after filtering
    pub fn blocks_kept(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }
}

/// Run the splitting stages over an extracted text.
///
/// Deterministic: the same text and limit always yield identical groups.
pub fn split_text(text: &str, max_chars: usize) -> SplitOutcome {
    let book_name = detect_book_name(text);
    let blocks = split_into_blocks(text, &book_name);
    let blocks_found = blocks.len();
    let (kept, skipped) = partition_blocks(blocks);
    let groups = group_blocks(kept, max_chars);

    SplitOutcome {
        book_name,
        blocks_found,
        skipped,
        groups,
    }
}
