// src/specs/canoe.rs
//
// Vector CANoe HTML test report.
//
// Shape we rely on (everything else is ignored):
//
//   <td class="TestcaseHeadingNegativeResult">Test Case 1/2: Name: Failed</td>
//   ...
//   <table> ... <big>Main Part of Test Case</big> ... </table>
//   <div>
//     <table class="ResultTable">
//       <tr><td>ts</td><td>step</td><td>description</td><td class="NegativeResultCell">fail</td></tr>
//     </table>
//   </div>

use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;

use crate::config::consts::*;
use crate::core::{Document, Query};
use crate::summary::RawFailureRecord;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEADING_PATTERN).expect("heading pattern is valid"));

/// A failed test case whose result table was found.
#[derive(Clone, Debug)]
pub struct FailedTestCase<'a> {
    pub id: String,
    pub name: String,
    pub result_table: ElementRef<'a>,
}

/// "Test Case 3/1: Foo: Bar: Failed" → ("3/1", "Foo: Bar")
pub fn parse_heading(text: &str) -> Option<(String, String)> {
    let caps = HEADING_RE.captures(text)?;
    Some((caps[1].to_string(), caps[2].to_string()))
}

/// heading → next "Main Part of Test Case" label → enclosing table →
/// following div → ResultTable
pub fn locate_result_table<'a>(heading: ElementRef<'a>) -> Option<ElementRef<'a>> {
    let label = heading.find_next(MAIN_PART_TAG, |t| t.contains(MAIN_PART_TEXT));
    let Some(label) = label else {
        logd!("Locate: no '{}' label after heading", MAIN_PART_TEXT);
        return None;
    };
    let located = label
        .find_parent("table")
        .and_then(|t| t.find_next_sibling("div"))
        .and_then(|d| d.find("table", RESULT_TABLE_CLASS));
    if located.is_none() {
        logd!("Locate: label found but no {} behind it", RESULT_TABLE_CLASS);
    }
    located
}

/// All negative headings that match the pattern and lead to a result table,
/// in document order.
pub fn locate_failed_cases(doc: &Document) -> Vec<FailedTestCase<'_>> {
    let headings = doc.find_all(HEADING_TAG, HEADING_NEGATIVE_CLASS);
    logd!("Locate: {} negative heading(s)", headings.len());

    headings
        .into_iter()
        .filter_map(|heading| {
            let text = heading.stripped_text();
            let Some((id, name)) = parse_heading(&text) else {
                logd!("Locate: heading text does not match: {:?}", text);
                return None;
            };
            let result_table = locate_result_table(heading)?;
            Some(FailedTestCase { id, name, result_table })
        })
        .collect()
}

/// Failing rows of one result table: exactly four cells, the fourth carrying
/// the negative-result class.
pub fn extract_rows(case: &FailedTestCase<'_>) -> Vec<RawFailureRecord> {
    case.result_table
        .find_all_tag("tr")
        .into_iter()
        .filter_map(|row| {
            let cells = row.find_all_tag("td");
            if cells.len() != RESULT_ROW_CELLS || !cells[3].has_class(NEGATIVE_CELL_CLASS) {
                return None;
            }
            Some(RawFailureRecord {
                test_case_id: case.id.clone(),
                test_case_name: case.name.clone(),
                timestamp: cells[0].stripped_text(),
                test_step: cells[1].stripped_text(),
                fail_description: cells[2].stripped_text(),
            })
        })
        .collect()
}

/// Every failing row of the report, in document order.
pub fn extract_raw(doc: &Document) -> Vec<RawFailureRecord> {
    let mut out = Vec::new();
    for case in locate_failed_cases(doc) {
        let rows = extract_rows(&case);
        logd!("Extract: test case {} → {} failing row(s)", case.id, rows.len());
        out.extend(rows);
    }
    out
}
