// src/summary.rs
//
// Failure records and the grouping step.
//
// - RawFailureRecord: one failing result-table row.
// - FailureSummaryRecord: one row per distinct (id, name, description) key,
//   carrying the first-seen timestamp/step and the group size.

use std::fmt;

use indexmap::IndexMap;

/// One failing step, as read from a ResultTable row.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RawFailureRecord {
    pub test_case_id: String,
    pub test_case_name: String,
    pub timestamp: String,
    pub test_step: String,
    pub fail_description: String,
}

impl RawFailureRecord {
    pub fn key(&self) -> FailureKey {
        FailureKey {
            test_case_id: self.test_case_id.clone(),
            test_case_name: self.test_case_name.clone(),
            fail_description: self.fail_description.clone(),
        }
    }
}

/// Grouping key. Timestamp and step are not part of it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FailureKey {
    pub test_case_id: String,
    pub test_case_name: String,
    pub fail_description: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailureSummaryRecord {
    pub test_case_id: String,
    pub test_case_name: String,
    pub timestamp: String,
    pub test_step: String,
    pub fail_description: String,
    /// Number of raw records sharing the key, always >= 1.
    pub count: usize,
}

impl FailureSummaryRecord {
    fn first_of(raw: RawFailureRecord) -> Self {
        Self {
            test_case_id: raw.test_case_id,
            test_case_name: raw.test_case_name,
            timestamp: raw.timestamp,
            test_step: raw.test_step,
            fail_description: raw.fail_description,
            count: 1,
        }
    }

    /// Cells in export column order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.test_case_id.clone(),
            self.test_case_name.clone(),
            self.timestamp.clone(),
            self.test_step.clone(),
            self.fail_description.clone(),
            self.count.to_string(),
        ]
    }
}

/// Deduplicated failures of one report, in first-occurrence order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FailureSummary {
    records: Vec<FailureSummaryRecord>,
    raw_total: usize,
}

impl FailureSummary {
    pub fn records(&self) -> &[FailureSummaryRecord] { &self.records }
    pub fn iter(&self) -> std::slice::Iter<'_, FailureSummaryRecord> { self.records.iter() }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// How many raw rows went in.
    pub fn raw_total(&self) -> usize { self.raw_total }

    /// Sum of all counts; equals `raw_total()`.
    pub fn total_occurrences(&self) -> usize {
        self.records.iter().map(|r| r.count).sum()
    }
}

impl<'a> IntoIterator for &'a FailureSummary {
    type Item = &'a FailureSummaryRecord;
    type IntoIter = std::slice::Iter<'a, FailureSummaryRecord>;
    fn into_iter(self) -> Self::IntoIter { self.records.iter() }
}

impl fmt::Display for FailureSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in &self.records {
            writeln!(
                f,
                "{} {}: {} (x{})",
                r.test_case_id, r.test_case_name, r.fail_description, r.count
            )?;
        }
        Ok(())
    }
}

/// Group by (id, name, description). Output order is the order in which each
/// key first appears; the first record of a group supplies timestamp/step.
pub fn aggregate<I>(records: I) -> FailureSummary
where
    I: IntoIterator<Item = RawFailureRecord>,
{
    let mut groups: IndexMap<FailureKey, FailureSummaryRecord> = IndexMap::new();
    let mut raw_total = 0usize;

    for raw in records {
        raw_total += 1;
        groups
            .entry(raw.key())
            .and_modify(|r| r.count += 1)
            .or_insert_with(|| FailureSummaryRecord::first_of(raw));
    }

    FailureSummary {
        records: groups.into_values().collect(),
        raw_total,
    }
}
