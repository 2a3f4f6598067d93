//! Grouped totals and their tabular form

use std::fmt;
use std::sync::Arc;
use arrow::array::{ArrayRef, Float64Builder, Int64Builder, StringBuilder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use nfl_core::{GroupKey, Metric};

use crate::DataError;

/// Value of a grouping column
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupValue {
    Int(i64),
    Text(String),
}

impl fmt::Display for GroupValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupValue::Int(v) => write!(f, "{}", v),
            GroupValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Sum of a metric over one group
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotal {
    pub key: GroupValue,
    pub total: f64,
}

/// Turn grouped totals into a two-column batch named after the key and metric
pub fn totals_to_batch(
    totals: &[GroupTotal],
    key: GroupKey,
    metric: Metric,
) -> Result<RecordBatch, DataError> {
    let key_array: ArrayRef = match key {
        GroupKey::Season => {
            let mut builder = Int64Builder::with_capacity(totals.len());
            for total in totals {
                match &total.key {
                    GroupValue::Int(v) => builder.append_value(*v),
                    GroupValue::Text(s) => match s.parse::<i64>() {
                        Ok(v) => builder.append_value(v),
                        Err(_) => builder.append_null(),
                    },
                }
            }
            Arc::new(builder.finish())
        }
        GroupKey::PlayerName => {
            let mut builder = StringBuilder::new();
            for total in totals {
                builder.append_value(total.key.to_string());
            }
            Arc::new(builder.finish())
        }
    };

    let mut value_builder = Float64Builder::with_capacity(totals.len());
    for total in totals {
        value_builder.append_value(total.total);
    }

    let key_type = match key {
        GroupKey::Season => DataType::Int64,
        GroupKey::PlayerName => DataType::Utf8,
    };
    let schema = Schema::new(vec![
        Field::new(key.column(), key_type, true),
        Field::new(metric.column(), DataType::Float64, false),
    ]);

    Ok(RecordBatch::try_new(
        Arc::new(schema),
        vec![key_array, Arc::new(value_builder.finish())],
    )?)
}
