use nfl_core::Metric;
use serde::Serialize;

use crate::charts::ChartData;

/// One display request handed to the UI
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Block {
    Title(String),
    Subtitle(String),
    Heading(String),
    Subheading(String),
    Text(String),
    Caption(String),

    /// Informational box, e.g. an empty search result
    Notice(String),

    /// A view-local failure; the rest of the page still renders
    Error(String),

    /// Free-text search box bound to the page's query
    SearchInput { label: String },

    /// Dropdown bound to the page's selected metric
    MetricSelect {
        label: String,
        options: Vec<Metric>,
        selected: Metric,
    },

    Chart(ChartData),
}

/// Everything a page wants shown, in order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderTree {
    pub sidebar: Vec<Block>,
    pub main: Vec<Block>,
}

impl RenderTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: Block) {
        self.main.push(block);
    }

    pub fn push_sidebar(&mut self, block: Block) {
        self.sidebar.push(block);
    }

    /// Charts in the main area, in display order
    pub fn charts(&self) -> impl Iterator<Item = &ChartData> {
        self.main.iter().filter_map(|block| match block {
            Block::Chart(chart) => Some(chart),
            _ => None,
        })
    }

    /// Notices in the main area
    pub fn notices(&self) -> impl Iterator<Item = &str> {
        self.main.iter().filter_map(|block| match block {
            Block::Notice(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.main.iter().filter_map(|block| match block {
            Block::Error(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// Dump as pretty JSON for debugging
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
