//! Column typing for the player-season table
//!
//! The header row is trusted as-is. Known columns get a fixed arrow type, any
//! other column is carried along as text. Nothing here rejects a header that
//! lacks an expected column; that surfaces as `MissingColumn` when a view
//! first reads it.

use arrow::datatypes::{DataType, Field, Schema};
use nfl_core::{columns, Metric};

/// Arrow type used for a column name
pub fn column_type(name: &str) -> DataType {
    match name {
        columns::PLAYER_NAME => DataType::Utf8,
        columns::SEASON => DataType::Int64,
        other if Metric::from_column(other).is_some() => DataType::Float64,
        _ => DataType::Utf8,
    }
}

/// Build the table schema from a CSV header row
pub fn table_schema(headers: &[String]) -> Schema {
    let fields = headers
        .iter()
        .map(|name| Field::new(name, column_type(name), true))
        .collect::<Vec<_>>();
    Schema::new(fields)
}

/// Expected columns absent from `schema`
pub fn missing_columns(schema: &Schema) -> Vec<&'static str> {
    columns::ALL
        .into_iter()
        .filter(|name| schema.index_of(name).is_err())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_known_columns_are_typed() {
        let schema = table_schema(&headers(&["player_name", "season", "rushing_yards", "team"]));
        assert_eq!(schema.field(0).data_type(), &DataType::Utf8);
        assert_eq!(schema.field(1).data_type(), &DataType::Int64);
        assert_eq!(schema.field(2).data_type(), &DataType::Float64);
        assert_eq!(schema.field(3).data_type(), &DataType::Utf8);
    }

    #[test]
    fn test_missing_columns_reported_in_header_order() {
        let schema = table_schema(&headers(&["player_name", "season", "passing_yards"]));
        assert_eq!(
            missing_columns(&schema),
            vec!["receiving_yards", "rushing_yards", "total_yards", "fantasy_points_ppr"]
        );
    }
}
