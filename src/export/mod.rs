//! Import-file export layer
//!
//! Owns the output side of the pipeline: date tag, target path resolution and
//! the two-block Pleco artifact. Nothing here re-sorts or re-deduplicates.

mod options;
mod writer;

pub use options::{ExportOptions, today_tag};
pub use writer::write_import_file;
