//! Deduplication and ordering of fetched word lists

use super::Word;

/// The deduplicated, sorted primary export list
///
/// Invariants: no duplicate entries, strictly increasing in codepoint order.
/// Only [`sort_and_deduplicate`] constructs one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CanonicalList {
    words: Vec<Word>,
}

impl CanonicalList {
    /// The entries, in collation order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of unique entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the entries in collation order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a CanonicalList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Collapse a fetched word list to unique entries in codepoint order
///
/// Duolingo lists some words more than once; duplicates are dropped and the
/// survivors sorted so that exports from different dates diff cleanly. The
/// ordering is plain codepoint collation, not pinyin or stroke order.
///
/// Total on all inputs; an empty list yields an empty list.
///
/// # Examples
/// ```
/// use duo_pleco::core::{Word, sort_and_deduplicate};
///
/// let fetched: Vec<Word> = ["这", "这儿", "这", "说"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let canonical = sort_and_deduplicate(fetched);
/// let texts: Vec<&str> = canonical.iter().map(Word::text).collect();
/// assert_eq!(texts, vec!["说", "这", "这儿"]);
/// ```
#[must_use]
pub fn sort_and_deduplicate(mut words: Vec<Word>) -> CanonicalList {
    words.sort_unstable();
    words.dedup();
    CanonicalList { words }
}
