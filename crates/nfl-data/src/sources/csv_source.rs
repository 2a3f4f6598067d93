use std::io::Read;
use std::sync::Arc;
use arrow::array::{ArrayRef, Float64Builder, Int64Builder, StringBuilder};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use csv::{ReaderBuilder, Trim};

use crate::schema;
use crate::DataError;

/// Typed builder for one column
enum ColumnBuilder {
    Int(Int64Builder),
    Float(Float64Builder),
    Text(StringBuilder),
}

impl ColumnBuilder {
    fn for_type(data_type: &DataType) -> Self {
        match data_type {
            DataType::Int64 => ColumnBuilder::Int(Int64Builder::new()),
            DataType::Float64 => ColumnBuilder::Float(Float64Builder::new()),
            _ => ColumnBuilder::Text(StringBuilder::new()),
        }
    }

    /// Append one cell. Empty cells become nulls.
    fn append(&mut self, raw: &str) -> Result<(), String> {
        let value = raw.trim();
        match self {
            ColumnBuilder::Int(builder) => {
                if value.is_empty() {
                    builder.append_null();
                } else if let Ok(v) = value.parse::<i64>() {
                    builder.append_value(v);
                } else {
                    // Spreadsheet exports sometimes write whole numbers as "2020.0"
                    match value.parse::<f64>() {
                        Ok(v) if v.fract() == 0.0 && in_i64_range(v) => builder.append_value(v as i64),
                        Ok(v) if v.fract() == 0.0 => return Err(format!("'{}' is out of integer range", value)),
                        _ => return Err(format!("'{}' is not an integer", value)),
                    }
                }
            }
            ColumnBuilder::Float(builder) => {
                if value.is_empty() {
                    builder.append_null();
                } else {
                    match value.parse::<f64>() {
                        Ok(v) if v.is_nan() => builder.append_null(),
                        Ok(v) => builder.append_value(v),
                        Err(_) => return Err(format!("'{}' is not a number", value)),
                    }
                }
            }
            ColumnBuilder::Text(builder) => {
                if raw.is_empty() {
                    builder.append_null();
                } else {
                    builder.append_value(raw);
                }
            }
        }
        Ok(())
    }

    fn finish(self) -> ArrayRef {
        match self {
            ColumnBuilder::Int(mut builder) => Arc::new(builder.finish()),
            ColumnBuilder::Float(mut builder) => Arc::new(builder.finish()),
            ColumnBuilder::Text(mut builder) => Arc::new(builder.finish()),
        }
    }
}

/// Whether `v` converts to `i64` without clamping. 2^63 itself is excluded.
fn in_i64_range(v: f64) -> bool {
    v >= i64::MIN as f64 && v < i64::MAX as f64
}

/// Parse comma separated text with a header row into a single batch
pub fn read_csv<R: Read>(reader: R) -> Result<RecordBatch, DataError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(DataError::DataUnavailable("response has no header row".to_string()));
    }

    let table_schema = schema::table_schema(&headers);
    let mut builders: Vec<ColumnBuilder> = table_schema
        .fields()
        .iter()
        .map(|field| ColumnBuilder::for_type(field.data_type()))
        .collect();

    for (idx, result) in csv_reader.records().enumerate() {
        let record = result?;
        for (col_idx, builder) in builders.iter_mut().enumerate() {
            let value = record.get(col_idx).unwrap_or("");
            builder.append(value).map_err(|reason| {
                // +2: one for the header, one for 1-based line numbers
                DataError::DataUnavailable(format!(
                    "line {}, column '{}': {}",
                    idx + 2,
                    headers[col_idx],
                    reason
                ))
            })?;
        }
    }

    let columns: Vec<ArrayRef> = builders.into_iter().map(ColumnBuilder::finish).collect();
    let batch = RecordBatch::try_new(Arc::new(table_schema), columns)?;

    let missing = schema::missing_columns(&batch.schema());
    if !missing.is_empty() {
        tracing::warn!("Loaded table lacks expected columns: {:?}", missing);
    }

    Ok(batch)
}
