//! Arrow schema for flat records
//!
//! Converts between [`FlatRecord`]s and Arrow RecordBatches. Column names,
//! order and types come from [`COLUMNS`].

use crate::error::{Error, Result};
use crate::record::{ColumnKind, FlatRecord, COLUMNS};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::json::{ArrayWriter, ReaderBuilder};
use arrow::record_batch::RecordBatch;
use std::sync::Arc;

/// Arrow schema of a flat record
///
/// Fields are nullable so that CSV input, where empty text reads back as
/// null, still fits.
pub fn record_schema() -> Schema {
    let fields: Vec<Field> = COLUMNS
        .iter()
        .map(|(name, kind)| Field::new(*name, data_type(*kind), true))
        .collect();
    Schema::new(fields)
}

fn data_type(kind: ColumnKind) -> DataType {
    match kind {
        ColumnKind::Text => DataType::Utf8,
        ColumnKind::Integer => DataType::UInt64,
        ColumnKind::Boolean => DataType::Boolean,
    }
}

/// Convert records to a single RecordBatch
pub fn records_to_batch(records: &[FlatRecord]) -> Result<RecordBatch> {
    let schema = Arc::new(record_schema());
    if records.is_empty() {
        return Ok(RecordBatch::new_empty(schema));
    }

    let mut decoder = ReaderBuilder::new(schema)
        .with_batch_size(records.len())
        .build_decoder()?;
    decoder.serialize(records)?;
    decoder
        .flush()?
        .ok_or_else(|| Error::output("Failed to create RecordBatch: no rows decoded"))
}

/// Convert a RecordBatch with the record schema back to records
///
/// Null cells take the field's default.
pub fn batch_to_records(batch: &RecordBatch) -> Result<Vec<FlatRecord>> {
    if batch.num_rows() == 0 {
        return Ok(Vec::new());
    }

    let mut writer = ArrayWriter::new(Vec::new());
    writer.write(batch)?;
    writer.finish()?;
    let bytes = writer.into_inner();

    Ok(serde_json::from_slice(&bytes)?)
}
