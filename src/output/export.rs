//! Export entry point

use super::writer::{write_csv, write_jsonl, write_parquet};
use crate::error::{Result, ResultExt};
use crate::record::FlatRecord;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// File format for exported records
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Comma-separated values, UTF-8 with BOM
    #[default]
    Csv,
    /// Apache Parquet
    Parquet,
    /// JSON Lines (one object per line)
    Jsonl,
}

impl ExportFormat {
    /// File extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Parquet => "parquet",
            Self::Jsonl => "jsonl",
        }
    }
}

/// What an export did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Rows were written to a file
    Written {
        /// Destination file
        path: PathBuf,
        /// Data rows written
        rows: usize,
    },
    /// There were no records, so no file was created
    NothingToExport,
}

/// Timestamped file name, e.g. `tiktok_scrape_20250101_120000.csv`
pub fn default_file_name(format: ExportFormat) -> String {
    format!(
        "tiktok_scrape_{}.{}",
        Local::now().format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// Write records to `target`, or to a timestamped file in the working
/// directory when no target is given
///
/// An empty record slice writes nothing.
pub fn export(
    records: &[FlatRecord],
    target: Option<&Path>,
    format: ExportFormat,
) -> Result<ExportOutcome> {
    if records.is_empty() {
        info!("No videos to export");
        return Ok(ExportOutcome::NothingToExport);
    }

    let path = match target {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(default_file_name(format)),
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let rows = match format {
        ExportFormat::Csv => write_csv(&path, records)?,
        ExportFormat::Parquet => write_parquet(&path, records, None)?,
        ExportFormat::Jsonl => write_jsonl(&path, records)?,
    };

    info!("Exported {rows} videos to {}", path.display());
    Ok(ExportOutcome::Written { path, rows })
}
