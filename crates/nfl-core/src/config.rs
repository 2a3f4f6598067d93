//! Data source configuration
//!
//! The spreadsheet identifiers are compiled in; there is no runtime override.

use std::time::Duration;

/// Google Sheets document id of the player statistics workbook
pub const SHEET_ID: &str = "1HITWGxY2Bu5QHdj7z7FeoBBIftVde7Wa4KoO8dMpzdc";

/// Tab (gid) inside the workbook holding the per-season rows
pub const SHEET_GID: &str = "291705184";

/// Where and how to fetch the table
#[derive(Debug, Clone, PartialEq)]
pub struct SourceConfig {
    pub sheet_id: String,
    pub gid: String,

    /// Request timeout. `None` waits as long as the server takes.
    pub timeout: Option<Duration>,

    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            sheet_id: SHEET_ID.to_string(),
            gid: SHEET_GID.to_string(),
            timeout: None,
            user_agent: concat!("nfl-explorer/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl SourceConfig {
    /// CSV export URL of the configured sheet tab
    pub fn export_url(&self) -> String {
        format!(
            "https://docs.google.com/spreadsheets/d/{}/export?format=csv&gid={}",
            self.sheet_id, self.gid
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_export_url() {
        let config = SourceConfig::default();
        assert_eq!(
            config.export_url(),
            "https://docs.google.com/spreadsheets/d/1HITWGxY2Bu5QHdj7z7FeoBBIftVde7Wa4KoO8dMpzdc/export?format=csv&gid=291705184"
        );
        assert!(config.timeout.is_none());
    }
}
