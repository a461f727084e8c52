// tests/common/mod.rs
//
// Small builder for CANoe-shaped HTML reports.
#![allow(dead_code)]

pub struct Row<'a> {
    pub ts: &'a str,
    pub step: &'a str,
    pub desc: &'a str,
    pub failed: bool,
}

pub fn fail<'a>(ts: &'a str, step: &'a str, desc: &'a str) -> Row<'a> {
    Row { ts, step, desc, failed: true }
}

pub fn pass<'a>(ts: &'a str, step: &'a str, desc: &'a str) -> Row<'a> {
    Row { ts, step, desc, failed: false }
}

/// Heading + "Main Part" table + sibling div holding the ResultTable.
pub fn test_case(heading_class: &str, heading: &str, rows: &[Row<'_>]) -> String {
    let mut body = String::new();
    for r in rows {
        let class = if r.failed { "NegativeResultCell" } else { "PositiveResultCell" };
        let verdict = if r.failed { "fail" } else { "pass" };
        body.push_str(&format!(
            "<tr><td class=\"DefineCell\">{}</td><td class=\"DefineCell\">{}</td><td class=\"DefineCell\">{}</td><td class=\"{}\">{}</td></tr>\n",
            r.ts, r.step, r.desc, class, verdict
        ));
    }
    format!(
        r#"
<table><tr><td class="{heading_class}">{heading}</td></tr></table>
<table class="OverviewTable"><tr><td>Test case begin</td><td>12:00:00</td></tr></table>
<table><tr><td><big class="Heading4">Main Part of Test Case</big></td></tr></table>
<div class="Indentation">
<table class="ResultTable">
<tr><th>Timestamp</th><th>Test Step</th><th>Description</th><th>Result</th></tr>
{body}</table>
</div>
"#
    )
}

pub fn failed_case(id: &str, name: &str, rows: &[Row<'_>]) -> String {
    test_case(
        "TestcaseHeadingNegativeResult",
        &format!("Test Case {id}: {name}: Failed"),
        rows,
    )
}

pub fn passed_case(id: &str, name: &str, rows: &[Row<'_>]) -> String {
    test_case(
        "TestcaseHeadingPositiveResult",
        &format!("Test Case {id}: {name}: Passed"),
        rows,
    )
}

pub fn report(cases: &[String]) -> String {
    format!(
        "<!DOCTYPE html>\n<html><head><title>Test Report</title></head><body>\n{}\n</body></html>\n",
        cases.concat()
    )
}
