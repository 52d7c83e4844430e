//! Display functions for command results

use crate::commands::{ExportSummary, PreviewResult};
use colored::Colorize;

/// Print the post-export word counts
///
/// Counts appear in pipeline order: as fetched, after dedup, then the derived
/// supplement.
pub fn print_export_summary(summary: &ExportSummary) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Exported to {}",
        summary.path.display().to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "Word counts:  Duolingo: {}   Dedup'd: {}   Expanded: {}",
        summary.fetched.to_string().bright_yellow(),
        summary.unique.to_string().bright_yellow(),
        summary.supplement.to_string().green().bold()
    );
}

/// Print both lists without writing anything
pub fn print_preview(result: &PreviewResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ", "WORD LIST PREVIEW".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    println!("\n{}", "Deduplicated words:".bright_cyan());
    for word in &result.canonical {
        println!("{word}");
    }

    println!("\n{}", "Characters that would be added:".bright_cyan());
    if result.supplement.is_empty() {
        println!("{}", "(none)".bright_black());
    } else {
        for word in &result.supplement {
            println!("{word}");
        }
    }

    println!(
        "\nWord counts:  Duolingo: {}   Dedup'd: {}   Expanded: {}",
        result.fetched.to_string().bright_yellow(),
        result.canonical.len().to_string().bright_yellow(),
        result.supplement.len().to_string().green().bold()
    );
}

/// Remind the operator how to diff against an older export
pub fn print_diff_hint() {
    println!("\nTo see only the entries new since an older export:");
    println!("  {}", "comm -13 <old_file> <new_file>".bright_black());
}
