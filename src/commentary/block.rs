use std::fmt;
use std::ops::Range;

// @module: Verse blocks and size-bounded groups

/// One verse-by-verse commentary block cut from the extracted text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Reference that opens the block, e.g. "2 Juan 1:4-6"
    pub reference: String,

    /// Block text, trimmed; always starts with `reference`
    pub content: String,

    /// Byte range of the untrimmed block inside the source text
    pub span: Range<usize>,

    // @field: Cached character count of `content`
    chars: usize,
}

impl Block {
    /// Create a block from its reference, content and source span
    pub fn new(reference: impl Into<String>, content: impl Into<String>, span: Range<usize>) -> Self {
        let content = content.into();
        let chars = content.chars().count();
        Block {
            reference: reference.into(),
            content,
            span,
            chars,
        }
    }

    /// Number of characters (not bytes) in the block content
    pub fn char_len(&self) -> usize {
        self.chars
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.content)
    }
}

/// Ordered, non-empty run of blocks destined for one output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    blocks: Vec<Block>,
    total_chars: usize,
}

impl Group {
    // @creates: Group seeded with its first block
    pub(crate) fn start(block: Block) -> Self {
        let total_chars = block.char_len();
        Group {
            blocks: vec![block],
            total_chars,
        }
    }

    pub(crate) fn push(&mut self, block: Block) {
        self.total_chars += block.char_len();
        self.blocks.push(block);
    }

    /// Blocks in document order
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Consume the group, yielding its blocks
    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    /// Number of blocks in the group
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always false; groups are never empty
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Sum of the block content lengths, separators excluded
    pub fn total_chars(&self) -> usize {
        self.total_chars
    }

    /// Reference of the first block
    pub fn first_reference(&self) -> &str {
        &self.blocks[0].reference
    }

    /// Reference of the last block
    pub fn last_reference(&self) -> &str {
        &self.blocks[self.blocks.len() - 1].reference
    }

    /// A single block that alone exceeds the limit
    pub fn is_oversized(&self, max_chars: usize) -> bool {
        self.total_chars > max_chars
    }
}
