// tests/cli_args.rs
//
// CLI argument mapping and a full run (requires --features cli).
//
#![cfg(feature = "cli")]
mod common;

use std::fs;

use canoe_failures::cli::{self, Args};
use canoe_failures::config::options::ExportFormat;
use canoe_failures::runner::process_report;
use canoe_failures::ReportError;
use clap::Parser;
use common::*;
use pretty_assertions::assert_eq;

#[test]
fn format_inferred_from_out_extension() {
    let args = Args::parse_from(["cli", "r.html", "-o", "out/x.csv"]);
    let export = cli::export_options(&args).unwrap();
    assert_eq!(export.format, ExportFormat::Csv);
    assert!(export.out_path().ends_with("x.csv"));
}

#[test]
fn explicit_format_wins() {
    let args = Args::parse_from(["cli", "r.html", "-o", "x.csv", "--format", "tsv", "--no-headers"]);
    let export = cli::export_options(&args).unwrap();
    assert_eq!(export.format, ExportFormat::Tsv);
    assert!(!export.include_headers);
    assert!(export.out_path().ends_with("x.tsv"));
}

#[test]
fn defaults_to_xlsx() {
    let args = Args::parse_from(["cli", "r.html"]);
    let export = cli::export_options(&args).unwrap();
    assert_eq!(export.format, ExportFormat::Xlsx);
    assert!(export.out_path().ends_with("failures_summary.xlsx"));
}

#[test]
fn run_writes_only_when_failures_exist() {
    let tmp = tempfile::tempdir().unwrap();
    let out = format!("{}/", tmp.path().display());

    let failing = tmp.path().join("failing.html");
    fs::write(&failing, report(&[failed_case("1", "A", &[fail("1", "s", "d")])])).unwrap();
    let args = Args::parse_from(["cli", failing.to_str().unwrap(), "-o", out.as_str()]);
    let written = cli::run(&args).unwrap();
    assert_eq!(written, Some(tmp.path().join("failures_summary.xlsx")));

    let clean = tmp.path().join("clean.html");
    fs::write(&clean, report(&[])).unwrap();
    let args = Args::parse_from(["cli", clean.to_str().unwrap(), "-o", out.as_str()]);
    assert_eq!(cli::run(&args).unwrap(), None);
}

#[test]
fn unknown_out_extension_is_rejected() {
    let args = Args::parse_from(["cli", "r.html", "-o", "foo.txt"]);
    let err = cli::export_options(&args).unwrap_err();
    assert!(matches!(err, ReportError::OutputFormat(ref ext) if ext == "txt"));

    // an explicit format settles it; the extension then follows the format
    let args = Args::parse_from(["cli", "r.html", "-o", "foo.txt", "--format", "csv"]);
    let export = cli::export_options(&args).unwrap();
    assert!(export.out_path().ends_with("foo.csv"));

    // directory hints carry no extension
    let args = Args::parse_from(["cli", "r.html", "-o", "out.d/"]);
    assert_eq!(cli::export_options(&args).unwrap().format, ExportFormat::Xlsx);
}

#[test]
fn unknown_extension_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let failing = tmp.path().join("failing.html");
    fs::write(&failing, report(&[failed_case("1", "A", &[fail("1", "s", "d")])])).unwrap();
    let out = tmp.path().join("foo.txt");
    let args = Args::parse_from(["cli", failing.to_str().unwrap(), "-o", out.to_str().unwrap()]);
    assert!(cli::run(&args).is_err());
    assert!(!tmp.path().join("foo.xlsx").exists());
}

#[test]
fn print_honours_no_headers() {
    let html = report(&[failed_case("1", "A", &[fail("1.0", "s", "d")])]);
    let outcome = process_report(html.as_bytes(), None).unwrap();

    let args = Args::parse_from(["cli", "r.html", "--print", "--no-headers"]);
    let text = cli::print_text(&outcome, &cli::export_options(&args).unwrap()).unwrap();
    assert_eq!(text, "1\tA\t1.0\ts\td\t1\n");

    let args = Args::parse_from(["cli", "r.html", "--print"]);
    let text = cli::print_text(&outcome, &cli::export_options(&args).unwrap()).unwrap();
    assert!(text.starts_with("Test Case ID\t"));
}
