//! Loading and querying the player-season table

pub mod aggregate;
pub mod schema;
pub mod sources;
pub mod table;

use arrow::error::ArrowError;
use thiserror::Error;

// Re-exports
pub use aggregate::{GroupTotal, GroupValue, totals_to_batch};
pub use sources::{read_csv, DataSource, SheetSource};
pub use table::{column_f64, column_labels, PlayerTable, SharedTable};

/// Errors that can occur in data operations
#[derive(Error, Debug)]
pub enum DataError {
    /// The source could not be reached or its body is not a table.
    /// Fatal to the session.
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// A referenced column is absent from the loaded table
    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Column '{0}' is not numeric")]
    NotNumeric(String),
}

impl DataError {
    /// Whether the error ends the session rather than a single view
    pub fn is_fatal(&self) -> bool {
        matches!(self, DataError::DataUnavailable(_))
    }
}

impl From<csv::Error> for DataError {
    fn from(error: csv::Error) -> Self {
        DataError::DataUnavailable(format!("CSV parsing error: {}", error))
    }
}

impl From<ArrowError> for DataError {
    fn from(error: ArrowError) -> Self {
        DataError::DataUnavailable(format!("Arrow error: {}", error))
    }
}

impl From<reqwest::Error> for DataError {
    fn from(error: reqwest::Error) -> Self {
        DataError::DataUnavailable(format!("Request failed: {}", error))
    }
}
