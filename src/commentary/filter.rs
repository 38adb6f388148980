use once_cell::sync::Lazy;
use regex::Regex;

use super::block::Block;

// @module: Administrative block filtering

// @const: General description/introduction headings, case-insensitive, ó or o
static ADMINISTRATIVE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:descripci[oó]n|introducci[oó]n)\s+general").unwrap()
});

/// True when the block is a general description or introduction section.
///
/// The heading may appear anywhere in the content.
pub fn is_administrative(content: &str) -> bool {
    ADMINISTRATIVE_REGEX.is_match(content)
}

/// Keep only commentary blocks, preserving order
pub fn filter_blocks(blocks: Vec<Block>) -> Vec<Block> {
    blocks
        .into_iter()
        .filter(|block| !is_administrative(&block.content))
        .collect()
}

/// Split blocks into (kept, skipped), both in document order
pub fn partition_blocks(blocks: Vec<Block>) -> (Vec<Block>, Vec<Block>) {
    blocks
        .into_iter()
        .partition(|block| !is_administrative(&block.content))
}
