//! Duolingo → Pleco flashcard exporter
//!
//! Extracts the vocabulary list from a saved copy of the Duolingo words page,
//! deduplicates and sorts it, derives the single characters that only occur
//! inside longer words, and writes a dated Pleco import file. Pleco looks up
//! pinyin and definitions on import, so the 汉字 alone are enough.
//!
//! # Quick Start
//!
//! ```rust
//! use duo_pleco::core::{Word, derive_missing_singles, sort_and_deduplicate};
//!
//! let fetched: Vec<Word> = ["这", "这儿", "认识", "这"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//!
//! let canonical = sort_and_deduplicate(fetched);
//! let supplement = derive_missing_singles(canonical.words());
//! assert_eq!(canonical.len(), 3);
//! assert_eq!(supplement.len(), 3); // 儿, 认, 识
//! ```

// Core word-processing pipeline
pub mod core;

// Word-list sources (the fetch boundary)
pub mod source;

// Import-file writing
pub mod export;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
