//! Duolingo → Pleco exporter - CLI
//!
//! Reads a saved copy of the Duolingo words page (or a plain word list),
//! deduplicates and sorts the entries, derives missing single characters and
//! writes a dated Pleco import file.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use duo_pleco::{
    commands::{run_export, run_preview},
    export::{ExportOptions, today_tag},
    output::{print_diff_hint, print_export_summary, print_preview},
    source::SourceType,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "duo_pleco",
    about = "Export Duolingo vocabulary as Pleco flashcard import files",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word source: a saved copy of the Duolingo words page, or a plain list
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Input format: auto (default), page (saved HTML), list (one word per line)
    #[arg(short, long, global = true, default_value = "auto")]
    format: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Process the word list and write the dated import file (default)
    Export {
        /// Output file or directory (default: pleco_duolingo_<date>.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Date tag as YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show what would be exported without writing a file
    Preview,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let input = cli
        .input
        .ok_or_else(|| anyhow::anyhow!("no input given; pass --input <path> (see --help)"))?;
    let source = SourceType::from_name(&cli.format, &input);

    // Default to Export if no command given
    let command = cli.command.unwrap_or(Commands::Export {
        output: None,
        date: None,
    });

    match command {
        Commands::Export { output, date } => run_export_command(&source, output, date),
        Commands::Preview => run_preview_command(&source),
    }
}

fn run_export_command(
    source: &SourceType,
    output: Option<PathBuf>,
    date: Option<String>,
) -> Result<()> {
    let date_tag = match date {
        Some(raw) => validated_date_tag(&raw)?,
        None => today_tag(),
    };

    let mut options = ExportOptions::new(date_tag);
    if let Some(path) = output {
        options.set_output(path);
    }

    println!("exporting to file: {}", options.out_path().display());

    let summary = run_export(source, &options)?;
    print_export_summary(&summary);
    print_diff_hint();
    Ok(())
}

fn run_preview_command(source: &SourceType) -> Result<()> {
    let result = run_preview(source)?;
    print_preview(&result);
    Ok(())
}

/// Check a user-supplied date tag and normalize it to YYYY-MM-DD
fn validated_date_tag(raw: &str) -> Result<String> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| anyhow::anyhow!("invalid --date {raw:?}: {e}"))?;
    Ok(date.format("%Y-%m-%d").to_string())
}
