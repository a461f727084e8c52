// src/xlsx.rs
//
// Minimal single-sheet SpreadsheetML workbook, built in memory.
//
// Parts written:
//   [Content_Types].xml
//   _rels/.rels
//   xl/workbook.xml, xl/_rels/workbook.xml.rels
//   xl/styles.xml          (bold header style)
//   xl/worksheets/sheet1.xml
//
// Strings go in as inline strings (no shared-string table); Count is a
// numeric cell. Every archive entry carries the same fixed timestamp so the
// same summary always yields the same bytes.

use std::fmt::Write as _;
use std::io::{Cursor, Read, Write};

use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipArchive, ZipWriter};

use crate::config::consts::{SHEET_NAME, SUMMARY_HEADERS};
use crate::core::sanitize::xml_safe;
use crate::summary::FailureSummary;
use crate::{ReportError, Result};

const SHEET_PATH: &str = "xl/worksheets/sheet1.xml";
const WORKBOOK_PATH: &str = "xl/workbook.xml";

/// Longest text Excel keeps in one cell, in UTF-16 code units. Longer
/// cells make Excel offer to repair the file.
pub const MAX_CELL_LEN: usize = 32_767;

/// Column widths (characters) for the six summary columns.
const COL_WIDTHS: [u32; 6] = [14, 40, 14, 40, 60, 8];

/// One cell value.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(usize),
}

/// Workbook read back from bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Workbook {
    pub sheet_name: String,
    /// Row-major cell text; numbers come back as their decimal text.
    pub rows: Vec<Vec<String>>,
}

/// Serialize the summary: header row, then one row per record.
pub fn write_summary(summary: &FailureSummary) -> Result<Vec<u8>> {
    let mut rows: Vec<Vec<Cell<'_>>> = Vec::with_capacity(summary.len() + 1);
    rows.push(SUMMARY_HEADERS.iter().map(|h| Cell::Text(h)).collect());
    for r in summary {
        rows.push(vec![
            Cell::Text(&r.test_case_id),
            Cell::Text(&r.test_case_name),
            Cell::Text(&r.timestamp),
            Cell::Text(&r.test_step),
            Cell::Text(&r.fail_description),
            Cell::Number(r.count),
        ]);
    }
    write_workbook(SHEET_NAME, &rows, true)
}

/// Serialize arbitrary rows into a one-sheet workbook. With `bold_header`
/// the first row uses the bold style and stays frozen on scroll.
pub fn write_workbook(sheet_name: &str, rows: &[Vec<Cell<'_>>], bold_header: bool) -> Result<Vec<u8>> {
    let sheet = sheet_xml(rows, bold_header);
    let workbook = workbook_xml(sheet_name);

    let opt = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default());

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    zip.start_file("[Content_Types].xml", opt)?;
    zip.write_all(CONTENT_TYPES_XML.as_bytes())?;

    zip.start_file("_rels/.rels", opt)?;
    zip.write_all(ROOT_RELS_XML.as_bytes())?;

    zip.start_file(WORKBOOK_PATH, opt)?;
    zip.write_all(workbook.as_bytes())?;

    zip.start_file("xl/_rels/workbook.xml.rels", opt)?;
    zip.write_all(WORKBOOK_RELS_XML.as_bytes())?;

    zip.start_file("xl/styles.xml", opt)?;
    zip.write_all(STYLES_XML.as_bytes())?;

    zip.start_file(SHEET_PATH, opt)?;
    zip.write_all(sheet.as_bytes())?;

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

/// "A", "B", ... "Z", "AA", ...
pub fn column_name(mut ix: usize) -> String {
    let mut out = Vec::new();
    loop {
        out.push(b'A' + (ix % 26) as u8);
        if ix < 26 { break; }
        ix = ix / 26 - 1;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// Longest prefix of `s` that fits in one cell.
pub fn cap_cell(s: &str) -> &str {
    let mut units = 0;
    for (i, ch) in s.char_indices() {
        units += ch.len_utf16();
        if units > MAX_CELL_LEN {
            return &s[..i];
        }
    }
    s
}

/// Inverse of [`column_name`] on the letter prefix of a cell reference ("C12" → 2).
fn column_index(cell_ref: &str) -> Option<usize> {
    let letters: Vec<u8> = cell_ref
        .bytes()
        .take_while(|b| b.is_ascii_alphabetic())
        .map(|b| b.to_ascii_uppercase())
        .collect();
    if letters.is_empty() {
        return None;
    }
    let mut n = 0usize;
    for b in letters {
        n = n * 26 + (b - b'A' + 1) as usize;
    }
    Some(n - 1)
}

fn sheet_xml(rows: &[Vec<Cell<'_>>], bold_header: bool) -> String {
    let mut x = String::with_capacity(256 + rows.len() * 256);
    x.push_str(XML_DECL);
    x.push_str(r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#);

    if bold_header && !rows.is_empty() {
        x.push_str(concat!(
            r#"<sheetViews><sheetView workbookViewId="0">"#,
            r#"<pane ySplit="1" topLeftCell="A2" activePane="bottomLeft" state="frozen"/>"#,
            r#"</sheetView></sheetViews>"#,
        ));
    }

    let ncols = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    if ncols > 0 {
        x.push_str("<cols>");
        for c in 0..ncols {
            let w = COL_WIDTHS.get(c).copied().unwrap_or(14);
            let _ = write!(x, r#"<col min="{n}" max="{n}" width="{w}" customWidth="1"/>"#, n = c + 1);
        }
        x.push_str("</cols>");
    }

    x.push_str("<sheetData>");
    for (ri, row) in rows.iter().enumerate() {
        let rn = ri + 1;
        let style = if bold_header && ri == 0 { r#" s="1""# } else { "" };
        let _ = write!(x, r#"<row r="{rn}">"#);
        for (ci, cell) in row.iter().enumerate() {
            let r = format!("{}{}", column_name(ci), rn);
            match cell {
                Cell::Text(t) => {
                    let capped = cap_cell(t);
                    if capped.len() < t.len() {
                        logd!("Xlsx: cell {} cut to {} characters", r, MAX_CELL_LEN);
                    }
                    let _ = write!(
                        x,
                        r#"<c r="{r}"{style} t="inlineStr"><is><t xml:space="preserve">{}</t></is></c>"#,
                        escape(&*xml_safe(capped))
                    );
                }
                Cell::Number(n) => {
                    let _ = write!(x, r#"<c r="{r}"{style}><v>{n}</v></c>"#);
                }
            }
        }
        x.push_str("</row>");
    }
    x.push_str("</sheetData></worksheet>");
    x
}

fn workbook_xml(sheet_name: &str) -> String {
    format!(
        concat!(
            "{decl}",
            r#"<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" "#,
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
            r#"<sheets><sheet name="{name}" sheetId="1" r:id="rId1"/></sheets>"#,
            "</workbook>"
        ),
        decl = XML_DECL,
        name = escape(&*xml_safe(sheet_name)),
    )
}

/* ---------------- Reading ---------------- */

/// Re-read a workbook written by this module: first sheet name plus the
/// cells of `xl/worksheets/sheet1.xml`. Shared strings are not supported.
pub fn read_workbook(bytes: &[u8]) -> Result<Workbook> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let workbook = read_entry(&mut archive, WORKBOOK_PATH)?;
    let sheet_name = first_sheet_name(&workbook)?
        .ok_or_else(|| ReportError::Workbook(s!("workbook lists no sheets")))?;

    let sheet = read_entry(&mut archive, SHEET_PATH)?;
    let rows = sheet_rows(&sheet)?;

    Ok(Workbook { sheet_name, rows })
}

fn read_entry(archive: &mut ZipArchive<Cursor<&[u8]>>, name: &str) -> Result<String> {
    let mut entry = archive.by_name(name)?;
    let mut text = String::new();
    entry.read_to_string(&mut text)?;
    Ok(text)
}

fn attr(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>> {
    for a in e.attributes() {
        let a = a.map_err(quick_xml::Error::from)?;
        if a.key.as_ref() == key {
            return Ok(Some(a.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn first_sheet_name(xml: &str) -> Result<Option<String>> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"sheet" => {
                return attr(&e, b"name");
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

fn sheet_rows(xml: &str) -> Result<Vec<Vec<String>>> {
    let mut reader = Reader::from_str(xml);
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Option<Vec<String>> = None;

    // current cell: target column + accumulated text
    let mut cell: Option<(usize, String)> = None;
    let mut in_value = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"row" => row = Some(Vec::new()),
                b"c" => {
                    if attr(&e, b"t")?.as_deref() == Some("s") {
                        return Err(ReportError::Workbook(s!("shared strings are not supported")));
                    }
                    let next = row.as_ref().map(|r| r.len()).unwrap_or(0);
                    let col = attr(&e, b"r")?
                        .as_deref()
                        .and_then(column_index)
                        .unwrap_or(next);
                    cell = Some((col, s!()));
                }
                b"t" | b"v" => in_value = true,
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"row" => rows.push(Vec::new()),
                b"c" => {
                    // valueless cell; still occupies its column
                    if let Some(r) = row.as_mut() {
                        let next = r.len();
                        let col = attr(&e, b"r")?.as_deref().and_then(column_index).unwrap_or(next);
                        place(r, col, s!());
                    }
                }
                _ => {}
            },
            Event::Text(t) if in_value => {
                if let Some((_, buf)) = cell.as_mut() {
                    buf.push_str(&t.unescape()?);
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"t" | b"v" => in_value = false,
                b"c" => {
                    if let (Some(r), Some((col, text))) = (row.as_mut(), cell.take()) {
                        place(r, col, text);
                    }
                }
                b"row" => {
                    if let Some(r) = row.take() {
                        rows.push(r);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(rows)
}

fn place(row: &mut Vec<String>, col: usize, text: String) {
    if row.len() <= col {
        row.resize(col + 1, s!());
    }
    row[col] = text;
}

/* ---------------- Static parts ---------------- */

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

const CONTENT_TYPES_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    r#"<Default Extension="xml" ContentType="application/xml"/>"#,
    r#"<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#,
    r#"<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
    r#"<Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>"#,
    r#"</Types>"#,
);

const ROOT_RELS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>"#,
    r#"</Relationships>"#,
);

const WORKBOOK_RELS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>"#,
    r#"<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#,
    r#"</Relationships>"#,
);

// xf 0 = default, xf 1 = bold header
const STYLES_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
    r#"<fonts count="2">"#,
    r#"<font><sz val="11"/><name val="Calibri"/></font>"#,
    r#"<font><b/><sz val="11"/><name val="Calibri"/></font>"#,
    r#"</fonts>"#,
    r#"<fills count="2"><fill><patternFill patternType="none"/></fill><fill><patternFill patternType="gray125"/></fill></fills>"#,
    r#"<borders count="1"><border><left/><right/><top/><bottom/><diagonal/></border></borders>"#,
    r#"<cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs>"#,
    r#"<cellXfs count="2">"#,
    r#"<xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/>"#,
    r#"<xf numFmtId="0" fontId="1" fillId="0" borderId="0" xfId="0" applyFont="1"/>"#,
    r#"</cellXfs>"#,
    r#"<cellStyles count="1"><cellStyle name="Normal" xfId="0" builtinId="0"/></cellStyles>"#,
    r#"</styleSheet>"#,
);
