pub mod csv_source;
pub mod sheet_source;

pub use csv_source::read_csv;
pub use sheet_source::SheetSource;

use async_trait::async_trait;

use crate::{DataError, PlayerTable};

/// Trait for data sources
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch and parse the whole table
    async fn load(&self) -> Result<PlayerTable, DataError>;

    /// Get the source name/URL
    fn source_name(&self) -> &str;
}
