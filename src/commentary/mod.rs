/*!
 * Verse-by-verse commentary splitting.
 *
 * Turns the linear text extracted from a commentary PDF into size-bounded
 * groups of verse blocks. The stages run strictly forward:
 *
 * - `detector`: finds the book name used as the block boundary marker
 * - `segmenter`: cuts the text at every `<book> <chapter>:<verse>` reference
 * - `filter`: drops general description/introduction blocks
 * - `grouper`: packs blocks into groups without splitting any block
 * - `pipeline`: runs all of the above over one text
 *
 * None of the stages fail; they degrade to a fallback name or empty lists
 * and leave the decision to abort to the caller.
 */

// Re-export main types for easier usage
pub use self::block::{Block, Group};
pub use self::detector::{detect_book_name, FALLBACK_BOOK_NAME};
pub use self::filter::{filter_blocks, is_administrative, partition_blocks};
pub use self::grouper::{group_blocks, DEFAULT_MAX_CHARS};
pub use self::pipeline::{split_text, SplitOutcome};
pub use self::segmenter::{reference_pattern, split_into_blocks};

// Submodules
pub mod block;
pub mod detector;
pub mod filter;
pub mod grouper;
pub mod pipeline;
pub mod segmenter;
