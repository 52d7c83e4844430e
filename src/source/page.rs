//! Saved copies of the rendered words page
//!
//! The live page is JavaScript-rendered and sits behind a login, so the
//! operator saves it from their authenticated browser session and feeds the
//! file in here. Extraction is a tolerant linear tag scan, not a full HTML
//! parse: every `<span>` whose class attribute carries the vocabulary-cell
//! marker contributes its inner text, nested tags stripped.

use super::{FetchError, WordSource};
use crate::core::Word;
use std::fs;
use std::path::PathBuf;

/// Class-attribute substring Duolingo currently puts on vocabulary cells
pub const VOCAB_CLASS: &str = "_3_ODH";

const OPEN: &str = "<span";
const CLOSE: &str = "</span>";

/// Word source backed by a saved rendered copy of the words page
pub struct SavedPageSource {
    path: PathBuf,
    class_marker: String,
}

impl SavedPageSource {
    /// Create a source using the current vocabulary-cell marker
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_class_marker(path, VOCAB_CLASS)
    }

    /// Create a source matching a custom class marker
    ///
    /// The page's obfuscated class names change between site builds; this
    /// keeps the scan usable without a code change.
    pub fn with_class_marker(path: impl Into<PathBuf>, marker: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            class_marker: marker.into(),
        }
    }
}

impl WordSource for SavedPageSource {
    fn fetch(&self) -> Result<Vec<Word>, FetchError> {
        let html = fs::read_to_string(&self.path).map_err(|source| FetchError::Io {
            path: self.path.clone(),
            source,
        })?;

        let words = extract_cells(&html, &self.class_marker);
        if words.is_empty() {
            // Either an empty list or the markup stopped matching the marker;
            // an empty export is useless either way.
            return Err(FetchError::NoEntries {
                path: self.path.clone(),
            });
        }
        Ok(words)
    }
}

/// Pull the inner text of every span whose class carries `marker`
///
/// Cells are assumed not to nest further spans; other inline tags inside a
/// cell are stripped. Page order and duplicates are preserved.
fn extract_cells(html: &str, marker: &str) -> Vec<Word> {
    let mut out = Vec::new();
    let mut from = 0;

    while let Some((start, end)) = next_span_block(html, from) {
        let block = &html[start..end];
        if class_attr(block).is_some_and(|classes| classes.contains(marker)) {
            let text = strip_tags(block);
            if let Ok(word) = Word::new(text.trim()) {
                out.push(word);
            }
            from = end;
        } else {
            // step just past the open marker so nested spans still get scanned
            from = start + OPEN.len();
        }
    }
    out
}

/// Find the next `<span ...>...</span>` block at or after `from`
///
/// Returns the byte range of the whole block including both tags.
fn next_span_block(html: &str, from: usize) -> Option<(usize, usize)> {
    let mut at = from;
    loop {
        let start = html.get(at..)?.find(OPEN)? + at;
        let after = start + OPEN.len();

        // reject lookalike tags such as <spanner>
        if !matches!(
            html[after..].chars().next(),
            Some('>' | '/' | ' ' | '\t' | '\n' | '\r')
        ) {
            at = after;
            continue;
        }

        let open_end = html[start..].find('>')? + start + 1;
        let close_rel = html[open_end..].find(CLOSE)?;
        return Some((start, open_end + close_rel + CLOSE.len()));
    }
}

/// Extract the class attribute value from a block's open tag
fn class_attr(block: &str) -> Option<&str> {
    let open_end = block.find('>')?;
    let tag = &block[..open_end];

    let at = tag.find("class=")?;
    let rest = &tag[at + "class=".len()..];
    let quote = rest.as_bytes().first().copied()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    let rest = &rest[1..];
    let end = rest.find(quote as char)?;
    Some(&rest[..end])
}

/// Drop everything between `<` and `>`, keeping text nodes only
fn strip_tags(block: &str) -> String {
    let mut out = String::with_capacity(block.len());
    let mut in_tag = false;

    for ch in block.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}
