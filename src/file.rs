// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::{DEFAULT_FILE_NAME, XLSX_MIME};
use crate::config::options::{ExportFormat, ExportOptions};
use crate::csv::to_export_string;
use crate::summary::FailureSummary;
use crate::table::TableData;
use crate::{ReportError, Result};

/// In-memory file offered for download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// `failures_summary.xlsx`, single sheet "Failures".
    pub fn xlsx(summary: &FailureSummary) -> Result<Self> {
        Ok(Self {
            file_name: s!(DEFAULT_FILE_NAME),
            mime: XLSX_MIME,
            bytes: crate::xlsx::write_summary(summary)?,
        })
    }

    /// Any export format. Delimited formats honour `include_headers`.
    pub fn for_format(
        summary: &FailureSummary,
        format: ExportFormat,
        include_headers: bool,
    ) -> Result<Self> {
        let Some(sep) = format.delim() else {
            return Self::xlsx(summary);
        };
        let text = to_export_string(&TableData::from_summary(summary), include_headers, sep);
        Ok(Self {
            file_name: format!("{}.{}", crate::config::consts::DEFAULT_FILE_STEM, format.ext()),
            mime: format.mime(),
            bytes: text.into_bytes(),
        })
    }

    /// Write to `path` as given (parent directories are created).
    pub fn write_to(&self, path: &Path) -> Result<PathBuf> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_directory(parent)?;
            }
        }
        fs::write(path, &self.bytes).map_err(|source| ReportError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(path.to_path_buf())
    }
}

/// Build the artifact for the chosen format and write it to `export.out_path()`.
/// Returns the final path written to.
pub fn export_summary(export: &ExportOptions, summary: &FailureSummary) -> Result<PathBuf> {
    let artifact = Artifact::for_format(summary, export.format, export.include_headers)?;
    let path = export.out_path();
    logd!(
        "Export: {} bytes ({}) → {}",
        artifact.bytes.len(),
        artifact.mime,
        path.display()
    );
    artifact.write_to(&path)
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ReportError::Write {
            path: dir.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "path exists but is not a directory",
            ),
        });
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| ReportError::Write {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
