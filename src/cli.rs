// src/cli.rs
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use crate::config::options::{ExportFormat, ExportOptions};
use crate::csv::to_export_string;
use crate::progress::{Progress, Stage};
use crate::runner::{self, Outcome};
use crate::{ReportError, Result};

/// Extract failed test steps from a Vector CANoe HTML test report.
#[derive(Parser, Debug)]
#[command(name = "cli", version, about)]
pub struct Args {
    /// HTML test report to read
    pub report: PathBuf,

    /// Output file, or a directory ending in '/' [default: ./failures_summary.xlsx]
    #[arg(short, long)]
    pub out: Option<String>,

    /// Output format; inferred from --out's extension when omitted
    #[arg(long, value_enum)]
    pub format: Option<Format>,

    /// Also print the summary table (TSV) to stdout
    #[arg(long)]
    pub print: bool,

    /// Leave the header row out of CSV/TSV output
    #[arg(long)]
    pub no_headers: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Xlsx,
    Csv,
    Tsv,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Xlsx => ExportFormat::Xlsx,
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
        }
    }
}

struct CliProgress;

impl Progress for CliProgress {
    fn stage(&mut self, stage: Stage) {
        logd!("Stage: {:?}", stage);
    }
}

/// Map CLI arguments onto export options.
/// Without `--format`, the `--out` extension picks the format; an extension
/// that names no format is an error rather than a silent `.xlsx`.
pub fn export_options(args: &Args) -> Result<ExportOptions> {
    let mut export = ExportOptions::default();

    export.format = match (args.format, args.out.as_deref().and_then(out_extension)) {
        (Some(f), _) => f.into(),
        (None, Some(ext)) => {
            ExportFormat::from_ext(&ext).ok_or(ReportError::OutputFormat(ext))?
        }
        (None, None) => ExportFormat::default(),
    };
    export.include_headers = !args.no_headers;

    if let Some(out) = &args.out {
        export.set_path(out);
    }
    Ok(export)
}

/// Extension of a file-like `--out`; directory hints have none.
fn out_extension(out: &str) -> Option<String> {
    if out.ends_with(['/', '\\']) {
        return None;
    }
    Path::new(out).extension().map(|e| e.to_string_lossy().into_owned())
}

/// What `--print` writes to stdout: the summary as TSV, header row only
/// when headers are on.
pub fn print_text(outcome: &Outcome, export: &ExportOptions) -> Option<String> {
    outcome
        .table()
        .map(|table| to_export_string(&table, export.include_headers, '\t'))
}

/// Run once over `args.report`. Returns the written path, or `None` when the
/// report has no failures (nothing is written then).
pub fn run(args: &Args) -> Result<Option<PathBuf>> {
    // Bad output options fail before the report is read.
    let export = export_options(args)?;

    let mut progress = CliProgress;
    let outcome = runner::process_file(&args.report, Some(&mut progress))?;
    eprintln!("{}", outcome.message());

    let Outcome::Extracted(summary) = &outcome else {
        return Ok(None);
    };

    if args.print {
        if let Some(text) = print_text(&outcome, &export) {
            print!("{text}");
        }
    }

    let path = crate::file::export_summary(&export, summary)?;
    eprintln!("Wrote {}", path.display());
    Ok(Some(path))
}
