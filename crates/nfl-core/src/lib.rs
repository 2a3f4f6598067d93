//! Core types for the NFL player performance explorer
//!
//! This crate holds the pieces every other crate agrees on: the closed set of
//! metric columns, the page navigation state machine and the compiled-in
//! configuration.

pub mod config;
pub mod metric;
pub mod navigation;
pub mod state;

// Re-export commonly used types
pub use config::SourceConfig;
pub use metric::{Metric, GroupKey, columns};
pub use navigation::{Page, ViewInputs, ViewState};
pub use state::{AppSettings, PageConfig};
