// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub export: ExportOptions,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
        }
    }

    /// Field separator for the delimited formats; `None` for the workbook.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Xlsx => None,
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
        }
    }

    /// "xlsx" / "csv" / "tsv", case-insensitive.
    pub fn from_ext(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "xlsx" => Some(ExportFormat::Xlsx),
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            _ => None,
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => XLSX_MIME,
            ExportFormat::Csv => "text/csv",
            ExportFormat::Tsv => "text/tab-separated-values",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    /// Header row for CSV/TSV. The workbook always carries one.
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Xlsx,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// "<dir>/<stem>.<ext>", extension always follows the format.
    pub fn out_path(&self) -> PathBuf {
        let mut file_name = self.out_path.file_stem.clone();
        file_name.push(".");
        file_name.push(self.format.ext());
        self.out_path.dir.join(file_name)
    }

    /// Parse GUI/CLI text into dir + stem. A trailing separator or an existing
    /// directory keeps the current stem. Ignores pasted extension; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let s = crate::file::normalize_separators(text.trim());
        if s.is_empty() {
            return;
        }
        let p = Path::new(&s);

        if crate::file::looks_like_dir_hint(p) || p.is_dir() {
            self.out_path.dir = p.to_path_buf();
            return;
        }
        self.out_path.dir = match p.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from(DEFAULT_OUT_DIR),
        };
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE_STEM),
        }
    }
}
