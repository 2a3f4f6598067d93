//! Page renderers and chart hand-off
//!
//! Pages are pure functions from the navigation state and the session table
//! to a [`RenderTree`]. Charts are resolved here into plain series data and
//! drawn with egui by [`charts::show_chart`].

pub mod charts;
pub mod pages;
mod render_tree;

use nfl_data::DataError;
use thiserror::Error;

// Re-exports
pub use charts::{
    render_line, render_pie, render_scatter, show_chart, ChartData, LineSpec, PieSpec, ScatterSpec,
};
pub use pages::render_page;
pub use render_tree::{Block, RenderTree};

/// A chart description that cannot be drawn
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartSpecError {
    #[error("Chart spec is missing required field '{0}'")]
    MissingField(&'static str),
}

/// Errors raised while building a page
#[derive(Error, Debug)]
pub enum ViewError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Chart(#[from] ChartSpecError),
}

impl ViewError {
    /// Whether the error ends the session rather than a single view
    pub fn is_fatal(&self) -> bool {
        match self {
            ViewError::Data(err) => err.is_fatal(),
            ViewError::Chart(_) => false,
        }
    }
}
