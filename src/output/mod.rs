//! Output module
//!
//! Tabular export of scrape results.
//!
//! # Overview
//!
//! This module provides utilities for:
//! - Converting flat records to Arrow RecordBatches with a fixed schema
//! - Writing CSV (UTF-8 with BOM), Parquet and JSON Lines files
//! - Reading an exported CSV back into records

mod export;
mod schema;
mod writer;

pub use export::{default_file_name, export, ExportFormat, ExportOutcome};
pub use schema::{batch_to_records, record_schema, records_to_batch};
pub use writer::{
    read_csv, write_csv, write_jsonl, write_parquet, ParquetWriter, ParquetWriterConfig,
};
