use once_cell::sync::Lazy;
use regex::Regex;

// @module: Book-name detection

/// Name returned when no reference appears anywhere in the text
pub const FALLBACK_BOOK_NAME: &str = "Libro";

// @const: Optional 1-3 prefix, a word of (accented) Latin letters, then chapter:verse
static REFERENCE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([1-3]?\s*\p{Latin}+)\s+\d+:\d+").unwrap()
});

/// Detect the biblical book the commentary is about.
///
/// Takes the first reference-like token in document order, e.g. "2 Juan"
/// out of "2 Juan 1:1". Falls back to [`FALLBACK_BOOK_NAME`] when nothing
/// matches; the segmenter will then find no blocks.
pub fn detect_book_name(text: &str) -> String {
    REFERENCE_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_BOOK_NAME.to_string())
}
