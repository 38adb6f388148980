use log::{debug, warn};
use regex::Regex;

use super::block::Block;

// @module: Reference-delimited block segmentation

/// Builds the block-boundary pattern for one book.
///
/// The book name is matched literally and must be followed by a
/// `chapter:verse` pair (optionally a `-verse` range), so plain prose
/// mentions of the book never open a block.
pub fn reference_pattern(book_name: &str) -> Regex {
    let pattern = format!(r"{}\s+\d+:\d+(?:-\d+)?", regex::escape(book_name));
    // An escaped literal followed by a fixed suffix is always a valid pattern
    Regex::new(&pattern).unwrap()
}

/// Cut the text into blocks, one per reference to `book_name`.
///
/// Each block runs from its reference up to the next reference (or the end
/// of the text). Text before the first reference is dropped. Returns an
/// empty list when the book is never referenced.
pub fn split_into_blocks(text: &str, book_name: &str) -> Vec<Block> {
    if book_name.is_empty() {
        warn!("Empty book name, no blocks can be found");
        return Vec::new();
    }

    let pattern = reference_pattern(book_name);
    let starts: Vec<(usize, &str)> = pattern
        .find_iter(text)
        .map(|m| (m.start(), m.as_str()))
        .collect();

    if starts.is_empty() {
        warn!("No references found for '{}'", book_name);
        return Vec::new();
    }

    let mut blocks = Vec::with_capacity(starts.len());
    for (i, &(start, reference)) in starts.iter().enumerate() {
        let end = starts.get(i + 1).map_or(text.len(), |&(next, _)| next);
        let content = text[start..end].trim();
        blocks.push(Block::new(reference, content, start..end));
    }

    debug!(
        "Segmented {} blocks for '{}' ({} leading chars before first reference)",
        blocks.len(),
        book_name,
        starts[0].0
    );

    blocks
}
