// tests/aggregate.rs
//
// Grouping invariants of summary::aggregate.
//
use std::collections::HashSet;

use canoe_failures::summary::aggregate;
use canoe_failures::RawFailureRecord;
use pretty_assertions::assert_eq;

fn raw(id: &str, name: &str, ts: &str, step: &str, desc: &str) -> RawFailureRecord {
    RawFailureRecord {
        test_case_id: id.into(),
        test_case_name: name.into(),
        timestamp: ts.into(),
        test_step: step.into(),
        fail_description: desc.into(),
    }
}

fn sample() -> Vec<RawFailureRecord> {
    vec![
        raw("1", "A", "1.0", "s1", "x"),
        raw("2", "B", "2.0", "s1", "x"),
        raw("1", "A", "3.0", "s2", "x"),
        raw("1", "A", "4.0", "s3", "y"),
        raw("2", "B", "5.0", "s9", "x"),
        raw("1", "A", "6.0", "s4", "x"),
        raw("1", "A2", "7.0", "s1", "x"),
    ]
}

#[test]
fn counts_sum_to_raw_total() {
    let input = sample();
    let n = input.len();
    let summary = aggregate(input);
    assert_eq!(summary.raw_total(), n);
    assert_eq!(summary.total_occurrences(), n);
    assert!(summary.iter().all(|r| r.count >= 1));
}

#[test]
fn keys_are_unique() {
    let summary = aggregate(sample());
    let keys: HashSet<_> = summary
        .iter()
        .map(|r| (&r.test_case_id, &r.test_case_name, &r.fail_description))
        .collect();
    assert_eq!(keys.len(), summary.len());
}

#[test]
fn first_occurrence_order_and_representative() {
    let summary = aggregate(sample());
    let got: Vec<_> = summary
        .iter()
        .map(|r| (r.test_case_id.as_str(), r.test_case_name.as_str(), r.fail_description.as_str(), r.timestamp.as_str(), r.test_step.as_str(), r.count))
        .collect();
    assert_eq!(
        got,
        vec![
            ("1", "A", "x", "1.0", "s1", 3),
            ("2", "B", "x", "2.0", "s1", 2),
            ("1", "A", "y", "4.0", "s3", 1),
            ("1", "A2", "x", "7.0", "s1", 1),
        ]
    );
}

#[test]
fn empty_input_is_empty_summary() {
    let summary = aggregate(Vec::new());
    assert!(summary.is_empty());
    assert_eq!(summary.raw_total(), 0);
    assert_eq!(summary.to_string(), "");
}

#[test]
fn same_input_same_summary() {
    assert_eq!(aggregate(sample()), aggregate(sample()));
}
