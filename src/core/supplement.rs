//! Derivation of single characters hidden inside longer words

use super::Word;
use rustc_hash::FxHashSet;

/// Single characters that occur only inside multi-character entries
///
/// Invariants: every entry is a single character, has no standalone entry of
/// its own in the source list, occurs in at least one multi-character source
/// entry, and the list is strictly increasing in codepoint order. Only
/// [`derive_missing_singles`] constructs one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SupplementList {
    words: Vec<Word>,
}

impl SupplementList {
    /// The derived characters, in derivation (codepoint) order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of derived characters
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

    /// Iterate over the derived characters in derivation order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a SupplementList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Collect characters that are taught only as part of longer words
///
/// Some characters appear in the source list solely inside a multi-character
/// word or phrase, with no standalone card of their own. Splitting those out
/// aids recognition and makes compound derivations visible, so they become
/// separate flashcards.
///
/// The input must already be deduplicated; sortedness is not required. Set
/// semantics apply: a character recurring across several words appears once,
/// and a character that also has its own single-character entry is excluded
/// no matter how many longer words contain it.
///
/// Total on all inputs; with no multi-character entries the result is empty.
///
/// # Examples
/// ```
/// use duo_pleco::core::{Word, derive_missing_singles};
///
/// let words: Vec<Word> = ["这", "这儿", "认识"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let supplement = derive_missing_singles(&words);
/// let texts: Vec<&str> = supplement.iter().map(Word::text).collect();
/// assert_eq!(texts, vec!["儿", "认", "识"]);
/// ```
#[must_use]
pub fn derive_missing_singles(words: &[Word]) -> SupplementList {
    let singles: FxHashSet<char> = words
        .iter()
        .filter(|w| w.is_single())
        .filter_map(|w| w.chars().next())
        .collect();

    let mut candidates: FxHashSet<char> = FxHashSet::default();
    for word in words.iter().filter(|w| !w.is_single()) {
        candidates.extend(word.chars());
    }

    let mut missing: Vec<char> = candidates
        .into_iter()
        .filter(|ch| !singles.contains(ch))
        .collect();
    missing.sort_unstable();

    SupplementList {
        words: missing.into_iter().map(Word::single).collect(),
    }
}
