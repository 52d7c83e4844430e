//! Export target resolution

use chrono::Local;
use std::path::{Path, PathBuf};

/// Options controlling where the import file lands
///
/// The date tag is fixed at construction and appears both in the default
/// filename and in the card-category markers inside the file.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    date_tag: String,
    out: Option<PathBuf>,
}

impl ExportOptions {
    /// Create options for a given `YYYY-MM-DD` date tag
    pub fn new(date_tag: impl Into<String>) -> Self {
        Self {
            date_tag: date_tag.into(),
            out: None,
        }
    }

    /// Override the output target with an explicit file or directory
    pub fn set_output(&mut self, path: impl Into<PathBuf>) {
        self.out = Some(path.into());
    }

    /// The `YYYY-MM-DD` tag used in filenames and category markers
    #[inline]
    #[must_use]
    pub fn date_tag(&self) -> &str {
        &self.date_tag
    }

    /// Default filename for this date tag
    #[must_use]
    pub fn default_filename(&self) -> String {
        format!("pleco_duolingo_{}.txt", self.date_tag)
    }

    /// Resolve the final output path
    ///
    /// An explicit file path wins verbatim; a directory (or trailing-separator
    /// hint) gets the default filename appended; no override means the default
    /// filename in the working directory.
    #[must_use]
    pub fn out_path(&self) -> PathBuf {
        match &self.out {
            None => PathBuf::from(self.default_filename()),
            Some(p) if p.is_dir() || looks_like_dir_hint(p) => p.join(self.default_filename()),
            Some(p) => p.clone(),
        }
    }
}

/// Today's local date as the `YYYY-MM-DD` tag
#[must_use]
pub fn today_tag() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
