// src/config/consts.rs

// Report markup (Vector CANoe HTML test report)
pub const HEADING_TAG: &str = "td";
pub const HEADING_NEGATIVE_CLASS: &str = "TestcaseHeadingNegativeResult";
pub const HEADING_PATTERN: &str = r"Test Case ([\d/]+): (.+): Failed";
pub const MAIN_PART_TAG: &str = "big";
pub const MAIN_PART_TEXT: &str = "Main Part of Test Case";
pub const RESULT_TABLE_CLASS: &str = "ResultTable";
pub const NEGATIVE_CELL_CLASS: &str = "NegativeResultCell";
pub const RESULT_ROW_CELLS: usize = 4;

// Summary table
pub const SUMMARY_HEADERS: [&str; 6] = [
    "Test Case ID",
    "Test Case Name",
    "Timestamp",
    "Test Step",
    "Fail Description",
    "Count",
];

// Export
pub const SHEET_NAME: &str = "Failures";
pub const DEFAULT_OUT_DIR: &str = ".";
pub const DEFAULT_FILE_STEM: &str = "failures_summary";
pub const DEFAULT_FILE_NAME: &str = "failures_summary.xlsx";
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

// Local files
pub const LOG_FILE: &str = ".store/debug.log";
