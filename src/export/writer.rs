//! Pleco import file writing
//!
//! The artifact has two card categories: the deduplicated word list under a
//! `//Duo<date>` marker, then the derived characters under `//Duo<date>+`.
//! The supplement block is intentionally NOT merged or re-sorted into the
//! main block, so the characters added by derivation stay easy to spot.

use super::ExportOptions;
use crate::core::{CanonicalList, SupplementList, Word};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Write the import file, echoing every entry to the console
///
/// Parent directories are created as needed. Entries are echoed as they are
/// written; the marker lines go to the file only. Returns the path written.
///
/// # Errors
/// Returns an I/O error if the target cannot be created or written.
pub fn write_import_file(
    options: &ExportOptions,
    canonical: &CanonicalList,
    supplement: &SupplementList,
) -> io::Result<PathBuf> {
    let path = options.out_path();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(&path)?;
    let mut out = BufWriter::new(file);

    let marker = format!("//Duo{}", options.date_tag());
    write_block(&mut out, &marker, canonical.words())?;
    write_block(&mut out, &format!("{marker}+"), supplement.words())?;

    out.flush()?;
    Ok(path)
}

fn write_block<W: Write>(out: &mut W, marker: &str, words: &[Word]) -> io::Result<()> {
    writeln!(out, "{marker}")?;
    for word in words {
        writeln!(out, "{word}")?;
        println!("{word}"); // to console
    }
    Ok(())
}
