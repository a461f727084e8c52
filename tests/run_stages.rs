// tests/run_stages.rs
//
// Stage sequence reported through the Progress sink.
//
mod common;

use canoe_failures::csv::to_export_string;
use canoe_failures::progress::{NullProgress, Stage, StageLog};
use canoe_failures::runner::process_report;
use common::*;
use pretty_assertions::assert_eq;

#[test]
fn failures_end_in_presented() {
    let html = report(&[failed_case("1", "A", &[fail("1", "s", "d")])]);
    let mut log = StageLog::default();
    process_report(html.as_bytes(), Some(&mut log)).unwrap();
    assert_eq!(
        log.stages,
        vec![Stage::Idle, Stage::Parsed, Stage::Extracted, Stage::Aggregated, Stage::Presented]
    );
    assert!(log.stages.last().unwrap().is_terminal());
    assert_eq!(log.messages, vec!["Extracted 1 unique failures.".to_string()]);
}

#[test]
fn clean_report_ends_in_no_failures() {
    let html = report(&[passed_case("1", "A", &[pass("1", "s", "d")])]);
    let mut log = StageLog::default();
    process_report(html.as_bytes(), Some(&mut log)).unwrap();
    assert_eq!(log.stages.last(), Some(&Stage::NoFailures));
    assert_eq!(log.stages.iter().filter(|s| s.is_terminal()).count(), 1);
    assert_eq!(log.messages, vec!["No failures found in the uploaded report.".to_string()]);
}

#[test]
fn null_sink_changes_nothing() {
    let html = report(&[failed_case("1", "A", &[fail("1", "s", "d")])]);
    let with_sink = process_report(html.as_bytes(), Some(&mut NullProgress)).unwrap();
    let without = process_report(html.as_bytes(), None).unwrap();
    assert_eq!(with_sink, without);
}

#[test]
fn decode_failure_stops_after_idle() {
    let mut log = StageLog::default();
    assert!(process_report(b"PK\x03\x04\x00\x00", Some(&mut log)).is_err());
    assert_eq!(log.stages, vec![Stage::Idle]);
    assert!(log.messages.is_empty());
}

#[test]
fn each_run_starts_fresh() {
    let failing = report(&[failed_case("1", "A", &[fail("1", "s", "d")])]);
    let clean = report(&[]);
    let first = process_report(failing.as_bytes(), None).unwrap();
    let second = process_report(clean.as_bytes(), None).unwrap();
    assert_eq!(first.summary().map(|s| s.len()), Some(1));
    assert!(second.summary().is_none());
}

#[test]
fn table_text_for_clipboard() {
    let html = report(&[failed_case("7", "Wiper", &[fail("1.5", "Park", "Line1\nLine2")])]);
    let table = process_report(html.as_bytes(), None).unwrap().table().unwrap();
    assert_eq!(table.ncols(), 6);
    assert_eq!(table.display_cell(0, 4).as_deref(), Some("Line1 Line2"));

    let tsv = to_export_string(&table, false, '\t');
    assert_eq!(tsv, "7\tWiper\t1.5\tPark\t\"Line1\nLine2\"\t1\n");
}
