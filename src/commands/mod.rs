//! Command implementations

pub mod export;
pub mod preview;

pub use export::{ExportError, ExportSummary, run_export};
pub use preview::{PreviewResult, run_preview};
