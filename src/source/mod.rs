//! Word-list sources
//!
//! The fetch boundary of the pipeline. A source produces raw vocabulary
//! entries in on-page order, duplicates included; everything downstream
//! assumes nothing more. All fetch concerns (markup quirks, encoding, empty
//! inputs) stay behind the [`WordSource`] trait so the pipeline and its tests
//! never depend on a live session.

mod page;
mod text;

pub use page::SavedPageSource;
pub use text::PlainTextSource;

use crate::core::Word;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// A producer of raw vocabulary entries
pub trait WordSource {
    /// Fetch the raw word list, in source order, duplicates included
    ///
    /// # Errors
    /// Returns `FetchError` if the source cannot be read or yields no entries.
    fn fetch(&self) -> Result<Vec<Word>, FetchError>;
}

/// Error type for failed fetches
#[derive(Debug)]
pub enum FetchError {
    /// The backing file could not be read
    Io { path: PathBuf, source: io::Error },
    /// The source was readable but contained no vocabulary entries
    ///
    /// For a saved page this usually means the markup no longer matches the
    /// vocabulary-cell marker.
    NoEntries { path: PathBuf },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "source unavailable: {}: {source}", path.display())
            }
            Self::NoEntries { path } => {
                write!(f, "no vocabulary entries found in {}", path.display())
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::NoEntries { .. } => None,
        }
    }
}

/// Enum wrapper for all source types
///
/// Allows runtime selection of the input format while keeping static dispatch.
pub enum SourceType {
    /// Saved copy of the rendered Duolingo words page
    Page(SavedPageSource),
    /// Plain word list, one entry per line
    List(PlainTextSource),
}

impl WordSource for SourceType {
    fn fetch(&self) -> Result<Vec<Word>, FetchError> {
        match self {
            Self::Page(s) => s.fetch(),
            Self::List(s) => s.fetch(),
        }
    }
}

impl SourceType {
    /// Create a source from a format name and input path
    ///
    /// Supported names: "page", "html", "list", "text". Anything else
    /// (including "auto") guesses from the extension: `.html`/`.htm` are
    /// saved pages, everything else a plain list.
    #[must_use]
    pub fn from_name(name: &str, path: &Path) -> Self {
        match name {
            "page" | "html" => Self::Page(SavedPageSource::new(path)),
            "list" | "text" => Self::List(PlainTextSource::new(path)),
            _ => {
                if has_page_extension(path) {
                    Self::Page(SavedPageSource::new(path))
                } else {
                    Self::List(PlainTextSource::new(path))
                }
            }
        }
    }
}

fn has_page_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
}
