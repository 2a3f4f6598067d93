//! Chart specifications, their resolution against data, and egui drawing

pub mod colors;
pub mod line;
pub mod pie;
pub mod scatter;

use std::collections::BTreeMap;
use egui::Ui;
use nfl_core::AppSettings;
use serde::Serialize;

use crate::ChartSpecError;

pub use line::{render_line, LineChart, LineSpec};
pub use pie::{render_pie, PieChart, PieSlice, PieSpec};
pub use scatter::{render_scatter, ScatterChart, ScatterSeries, ScatterSpec};

/// A chart resolved into drawable series
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartData {
    Scatter(ScatterChart),
    Pie(PieChart),
    Line(LineChart),
}

impl ChartData {
    pub fn title(&self) -> &str {
        match self {
            ChartData::Scatter(chart) => &chart.title,
            ChartData::Pie(chart) => &chart.title,
            ChartData::Line(chart) => &chart.title,
        }
    }
}

/// Draw a resolved chart. `id` keeps plot state apart between charts.
pub fn show_chart(ui: &mut Ui, id: &str, chart: &ChartData, settings: &AppSettings) {
    ui.label(egui::RichText::new(chart.title()).strong());
    match chart {
        ChartData::Scatter(chart) => scatter::show(ui, id, chart, settings),
        ChartData::Pie(chart) => pie::show(ui, chart),
        ChartData::Line(chart) => line::show(ui, id, chart, settings),
    }
}

fn require(value: &str, field: &'static str) -> Result<(), ChartSpecError> {
    if value.trim().is_empty() {
        Err(ChartSpecError::MissingField(field))
    } else {
        Ok(())
    }
}

/// Display label for a field, falling back to the field name
fn axis_label(labels: &BTreeMap<String, String>, field: &str) -> String {
    labels
        .get(field)
        .cloned()
        .unwrap_or_else(|| field.to_string())
}
