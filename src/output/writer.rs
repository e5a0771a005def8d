//! File writers
//!
//! CSV, Parquet and JSON Lines writers for flat records, plus a CSV reader
//! for exported files.

use super::schema::{batch_to_records, record_schema, records_to_batch};
use crate::error::{Error, Result};
use crate::record::FlatRecord;
use arrow::csv::{ReaderBuilder, WriterBuilder};
use arrow::datatypes::Schema;
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

/// Byte order mark written ahead of CSV output so spreadsheet tools
/// detect UTF-8
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

// ============================================================================
// CSV
// ============================================================================

/// Write records as CSV with a header row
///
/// Returns the number of data rows written.
pub fn write_csv(path: impl AsRef<Path>, records: &[FlatRecord]) -> Result<usize> {
    let batch = records_to_batch(records)?;
    let file = File::create(path.as_ref())
        .map_err(|e| Error::output(format!("Failed to create file: {e}")))?;

    let mut out = BufWriter::new(file);
    out.write_all(UTF8_BOM)?;

    let mut writer = WriterBuilder::new().with_header(true).build(out);
    writer.write(&batch)?;
    writer.into_inner().flush()?;

    Ok(batch.num_rows())
}

/// Read a CSV file written by [`write_csv`]
pub fn read_csv(path: impl AsRef<Path>) -> Result<Vec<FlatRecord>> {
    let file = File::open(path.as_ref()).map_err(|e| Error::FileNotFound {
        path: format!("{}: {e}", path.as_ref().display()),
    })?;

    // The header row (BOM included) is skipped; columns are matched by position
    let reader = ReaderBuilder::new(Arc::new(record_schema()))
        .with_header(true)
        .build(file)?;

    let mut records = Vec::new();
    for batch in reader {
        records.extend(batch_to_records(&batch?)?);
    }
    Ok(records)
}

// ============================================================================
// JSON Lines
// ============================================================================

/// Write one JSON object per record per line
pub fn write_jsonl(path: impl AsRef<Path>, records: &[FlatRecord]) -> Result<usize> {
    let file = File::create(path.as_ref())
        .map_err(|e| Error::output(format!("Failed to create file: {e}")))?;
    let mut out = BufWriter::new(file);

    for record in records {
        serde_json::to_writer(&mut out, record)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    Ok(records.len())
}

// ============================================================================
// Parquet
// ============================================================================

/// Configuration for Parquet writer
#[derive(Debug, Clone)]
pub struct ParquetWriterConfig {
    compression: Compression,
    row_group_size: usize,
}

impl Default for ParquetWriterConfig {
    fn default() -> Self {
        Self {
            compression: Compression::SNAPPY,
            row_group_size: 1024 * 1024, // 1M rows
        }
    }
}

impl ParquetWriterConfig {
    /// Create a new config with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set row group size
    #[must_use]
    pub fn with_row_group_size(mut self, size: usize) -> Self {
        self.row_group_size = size;
        self
    }

    /// Get row group size
    #[must_use]
    pub fn row_group_size(&self) -> usize {
        self.row_group_size
    }

    /// Use no compression
    #[must_use]
    pub fn uncompressed(mut self) -> Self {
        self.compression = Compression::UNCOMPRESSED;
        self
    }

    /// Use ZSTD compression
    #[must_use]
    pub fn zstd(mut self) -> Self {
        self.compression = Compression::ZSTD(parquet::basic::ZstdLevel::default());
        self
    }

    fn build_properties(&self) -> WriterProperties {
        WriterProperties::builder()
            .set_compression(self.compression)
            .set_max_row_group_size(self.row_group_size)
            .build()
    }
}

/// Parquet file writer
pub struct ParquetWriter {
    writer: ArrowWriter<File>,
    rows_written: usize,
}

impl ParquetWriter {
    /// Create a new Parquet writer
    pub fn new(
        path: impl AsRef<Path>,
        schema: &Schema,
        config: &ParquetWriterConfig,
    ) -> Result<Self> {
        let file = File::create(path.as_ref())
            .map_err(|e| Error::output(format!("Failed to create file: {e}")))?;

        let props = config.build_properties();
        let writer = ArrowWriter::try_new(file, Arc::new(schema.clone()), Some(props))
            .map_err(|e| Error::output(format!("Failed to create Parquet writer: {e}")))?;

        Ok(Self {
            writer,
            rows_written: 0,
        })
    }

    /// Write a RecordBatch to the file
    pub fn write(&mut self, batch: &RecordBatch) -> Result<()> {
        self.writer
            .write(batch)
            .map_err(|e| Error::output(format!("Failed to write batch: {e}")))?;

        self.rows_written += batch.num_rows();
        Ok(())
    }

    /// Get the number of rows written so far
    #[must_use]
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Close the writer and finalize the file
    pub fn close(self) -> Result<usize> {
        let rows = self.rows_written;
        self.writer
            .close()
            .map_err(|e| Error::output(format!("Failed to close Parquet writer: {e}")))?;
        Ok(rows)
    }
}

/// Write records to a Parquet file
pub fn write_parquet(
    path: impl AsRef<Path>,
    records: &[FlatRecord],
    config: Option<&ParquetWriterConfig>,
) -> Result<usize> {
    let default_config = ParquetWriterConfig::default();
    let config = config.unwrap_or(&default_config);

    let batch = records_to_batch(records)?;
    let mut writer = ParquetWriter::new(path, batch.schema().as_ref(), config)?;
    writer.write(&batch)?;
    writer.close()
}
