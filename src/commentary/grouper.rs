use log::{debug, error};

use super::block::{Block, Group};

// @module: Size-bounded grouping of blocks

/// Default upper bound on characters per output file
pub const DEFAULT_MAX_CHARS: usize = 15_000;

/// Pack blocks into groups of at most `max_chars` characters.
///
/// Greedy single pass in document order. A block is never split: when it
/// does not fit the current group, that group is closed and the block starts
/// the next one. A block longer than `max_chars` therefore ends up alone in
/// its own oversized group. Separators between blocks are not counted.
///
/// `max_chars` must be positive; callers validate it beforehand.
pub fn group_blocks(blocks: Vec<Block>, max_chars: usize) -> Vec<Group> {
    let total_blocks = blocks.len();
    let mut groups = Vec::new();
    let mut current: Option<Group> = None;

    for block in blocks {
        current = Some(match current.take() {
            Some(group) if group.total_chars() + block.char_len() > max_chars => {
                groups.push(group);
                Group::start(block)
            }
            Some(mut group) => {
                group.push(block);
                group
            }
            None => Group::start(block),
        });
    }

    if let Some(group) = current {
        groups.push(group);
    }

    let grouped_blocks: usize = groups.iter().map(Group::len).sum();
    if grouped_blocks != total_blocks {
        error!(
            "Lost blocks during grouping! Original: {}, after grouping: {}",
            total_blocks, grouped_blocks
        );
    } else if log::max_level() >= log::LevelFilter::Debug {
        for (i, group) in groups.iter().enumerate() {
            debug!(
                "Group {}: {} blocks ({} .. {}, {} chars{})",
                i + 1,
                group.len(),
                group.first_reference(),
                group.last_reference(),
                group.total_chars(),
                if group.is_oversized(max_chars) { ", oversized" } else { "" }
            );
        }
    }

    groups
}
