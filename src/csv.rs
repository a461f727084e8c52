// src/csv.rs
use std::io::{self, Write};

use crate::table::TableData;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Write a whole table; the header row only when asked for and present.
pub fn write_table<W: Write>(
    mut w: W,
    table: &TableData,
    include_headers: bool,
    sep: char,
) -> io::Result<()> {
    if include_headers {
        if let Some(h) = &table.headers {
            write_row(&mut w, h, sep)?;
        }
    }
    for r in &table.rows {
        write_row(&mut w, r, sep)?;
    }
    Ok(())
}

/// Create a full export string (Copy/Export).
/// - `include_headers`: whether to emit a header line
/// - `sep`: character to be used as field/cell separator
pub fn to_export_string(table: &TableData, include_headers: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_table(&mut buf, table, include_headers, sep);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
