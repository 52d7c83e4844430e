//! Terminal output formatting

mod display;

pub use display::{print_diff_hint, print_export_summary, print_preview};
