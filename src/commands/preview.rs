//! Dry-run preview command
//!
//! Runs fetch and both transformations, then hands the lists back for
//! display. Nothing is written; useful for eyeballing a saved page before
//! committing to an export.

use crate::core::{CanonicalList, SupplementList, derive_missing_singles, sort_and_deduplicate};
use crate::source::{FetchError, WordSource};

/// Result of a preview run
pub struct PreviewResult {
    /// Entries as listed by the source, duplicates included
    pub fetched: usize,
    pub canonical: CanonicalList,
    pub supplement: SupplementList,
}

/// Fetch and transform without writing anything
///
/// # Errors
/// Returns `FetchError` if the source cannot produce a word list.
pub fn run_preview<S: WordSource>(source: &S) -> Result<PreviewResult, FetchError> {
    let fetched = source.fetch()?;
    let fetched_count = fetched.len();

    let canonical = sort_and_deduplicate(fetched);
    let supplement = derive_missing_singles(canonical.words());

    Ok(PreviewResult {
        fetched: fetched_count,
        canonical,
        supplement,
    })
}
