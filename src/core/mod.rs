//! Core word-processing pipeline
//!
//! Pure transformations over fetched word lists. Everything here is total:
//! no I/O, no failure modes, no shared state.

mod canonical;
mod supplement;
mod word;

pub use canonical::{CanonicalList, sort_and_deduplicate};
pub use supplement::{SupplementList, derive_missing_singles};
pub use word::{Word, WordError};
