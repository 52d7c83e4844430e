//! Full export pipeline command
//!
//! Fetch, transform, write, in that order. A fetch failure aborts before
//! anything touches the filesystem; there is no partial output.

use crate::core::{derive_missing_singles, sort_and_deduplicate};
use crate::export::{ExportOptions, write_import_file};
use crate::source::{FetchError, WordSource};
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result of a completed export
#[derive(Debug)]
pub struct ExportSummary {
    /// Entries as listed by the source, duplicates included
    pub fetched: usize,
    /// Entries after deduplication
    pub unique: usize,
    /// Derived single characters added
    pub supplement: usize,
    /// Where the import file landed
    pub path: PathBuf,
}

/// Error type for a failed export
///
/// Keeps the two collaborator failure modes distinct so the caller can tell
/// "source unavailable" from "write failed".
#[derive(Debug)]
pub enum ExportError {
    Fetch(FetchError),
    Write(io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(e) => write!(f, "{e}"),
            Self::Write(e) => write!(f, "write failed: {e}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Fetch(e) => Some(e),
            Self::Write(e) => Some(e),
        }
    }
}

impl From<FetchError> for ExportError {
    fn from(e: FetchError) -> Self {
        Self::Fetch(e)
    }
}

/// Run the fetch → transform → write pipeline
///
/// # Errors
/// Returns `ExportError::Fetch` if the source cannot produce a word list, or
/// `ExportError::Write` if the import file cannot be written.
pub fn run_export<S: WordSource>(
    source: &S,
    options: &ExportOptions,
) -> Result<ExportSummary, ExportError> {
    let fetched = source.fetch()?;
    let fetched_count = fetched.len();

    let canonical = sort_and_deduplicate(fetched);
    let supplement = derive_missing_singles(canonical.words());

    let path = write_import_file(options, &canonical, &supplement).map_err(ExportError::Write)?;

    Ok(ExportSummary {
        fetched: fetched_count,
        unique: canonical.len(),
        supplement: supplement.len(),
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use std::fs;
    use std::path::Path;

    struct StubSource(Vec<&'static str>);

    impl WordSource for StubSource {
        fn fetch(&self) -> Result<Vec<Word>, FetchError> {
            Ok(self.0.iter().map(|t| Word::new(*t).unwrap()).collect())
        }
    }

    struct FailingSource;

    impl WordSource for FailingSource {
        fn fetch(&self) -> Result<Vec<Word>, FetchError> {
            Err(FetchError::NoEntries {
                path: "stub.html".into(),
            })
        }
    }

    fn tmp_file(name: &str) -> std::path::PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("duo_pleco_export_{name}"));
        let _ = fs::remove_file(&p);
        p
    }

    #[test]
    fn pipeline_counts_and_content() {
        let source = StubSource(vec!["这", "这儿", "这里", "认识", "这", "说"]);
        let path = tmp_file("pipeline.txt");
        let mut options = ExportOptions::new("2020-06-01");
        options.set_output(&path);

        let summary = run_export(&source, &options).unwrap();

        assert_eq!(summary.fetched, 6);
        assert_eq!(summary.unique, 5);
        assert_eq!(summary.supplement, 4);
        assert_eq!(summary.path, path);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("//Duo2020-06-01\n认识\n"));
        assert!(content.contains("//Duo2020-06-01+\n儿\n"));
    }

    #[test]
    fn fetch_failure_propagates_without_output() {
        let path = tmp_file("untouched.txt");
        let mut options = ExportOptions::new("2020-06-01");
        options.set_output(&path);

        let err = run_export(&FailingSource, &options).unwrap_err();

        assert!(matches!(err, ExportError::Fetch(_)));
        assert!(!Path::new(&path).exists());
    }

    #[test]
    fn export_error_display_distinguishes_modes() {
        let fetch = ExportError::Fetch(FetchError::NoEntries {
            path: "saved.html".into(),
        });
        assert!(fetch.to_string().contains("saved.html"));

        let write = ExportError::Write(io::Error::other("disk full"));
        assert!(write.to_string().starts_with("write failed"));
    }
}
