//! Line chart

use std::collections::BTreeMap;
use arrow::record_batch::RecordBatch;
use egui::Ui;
use egui_plot::{Line, Plot, PlotPoints, Points};
use nfl_core::AppSettings;
use nfl_data::column_f64;
use serde::Serialize;

use super::{axis_label, colors, require};
use crate::{Block, ChartData, ViewError};

/// Which fields of a table to connect
#[derive(Debug, Clone, Default, Serialize)]
pub struct LineSpec {
    pub x: String,
    pub y: String,
    pub title: String,

    /// Display labels keyed by field name
    pub labels: BTreeMap<String, String>,
}

impl LineSpec {
    pub fn new(x: impl Into<String>, y: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            title: title.into(),
            labels: BTreeMap::new(),
        }
    }

    pub fn with_label(mut self, field: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(field.into(), label.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,

    /// Points in row order
    pub points: Vec<[f64; 2]>,
}

/// Resolve a line spec against `data`. Points keep row order; rows with a
/// null x or y are dropped.
pub fn render_line(spec: &LineSpec, data: &RecordBatch) -> Result<Block, ViewError> {
    require(&spec.title, "title")?;
    require(&spec.x, "x")?;
    require(&spec.y, "y")?;

    let xs = column_f64(data, &spec.x)?;
    let ys = column_f64(data, &spec.y)?;
    let points: Vec<[f64; 2]> = xs
        .iter()
        .zip(ys.iter())
        .filter_map(|(x, y)| Some([x?, y?]))
        .collect();

    tracing::debug!("Line '{}': {} points", spec.title, points.len());

    Ok(Block::Chart(ChartData::Line(LineChart {
        title: spec.title.clone(),
        x_label: axis_label(&spec.labels, &spec.x),
        y_label: axis_label(&spec.labels, &spec.y),
        points,
    })))
}

pub(crate) fn show(ui: &mut Ui, id: &str, chart: &LineChart, settings: &AppSettings) {
    let color = colors::categorical_color(0);
    let x_label = chart.x_label.clone();
    let y_label = chart.y_label.clone();

    Plot::new(id)
        .height(320.0)
        .x_axis_label(chart.x_label.as_str())
        .y_axis_label(chart.y_label.as_str())
        .label_formatter(move |_, value| {
            format!("{}: {:.0}\n{}: {:.1}", x_label, value.x, y_label, value.y)
        })
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::new(chart.points.clone()))
                    .color(color)
                    .width(settings.line_width)
                    .name(&chart.y_label),
            );
            plot_ui.points(
                Points::new(PlotPoints::new(chart.points.clone()))
                    .color(color)
                    .radius(settings.line_width + 1.0),
            );
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use nfl_core::{GroupKey, Metric};
    use nfl_data::{totals_to_batch, PlayerTable};

    #[test]
    fn test_line_keeps_row_order() {
        let csv = "player_name,season,fantasy_points_ppr\nA,2021,20\nA,2019,10\nA,2020,\n";
        let table = PlayerTable::from_csv_reader("test", csv.as_bytes()).unwrap();
        let spec = LineSpec::new("season", "fantasy_points_ppr", "A - Fantasy Points (PPR) by Season")
            .with_label("fantasy_points_ppr", "Fantasy Points (PPR)")
            .with_label("season", "Season");

        let Block::Chart(ChartData::Line(chart)) = render_line(&spec, table.batch()).unwrap() else {
            panic!("expected a line chart");
        };
        assert_eq!(chart.points, vec![[2021.0, 20.0], [2019.0, 10.0]]);
        assert_eq!(chart.x_label, "Season");
        assert_eq!(chart.y_label, "Fantasy Points (PPR)");
    }

    #[test]
    fn test_line_over_season_totals() {
        let csv = "player_name,season,fantasy_points_ppr\nA,2020,1.5\nB,2019,2\nC,2020,3\n";
        let table = PlayerTable::from_csv_reader("test", csv.as_bytes()).unwrap();
        let totals = table.season_aggregate(Metric::FantasyPointsPpr).unwrap();
        let batch = totals_to_batch(&totals, GroupKey::Season, Metric::FantasyPointsPpr).unwrap();

        let spec = LineSpec::new("season", "fantasy_points_ppr", "Total Fantasy Points (PPR) by Season");
        let Block::Chart(ChartData::Line(chart)) = render_line(&spec, &batch).unwrap() else {
            panic!("expected a line chart");
        };
        assert_eq!(chart.points, vec![[2019.0, 2.0], [2020.0, 4.5]]);
    }

    #[test]
    fn test_empty_axis_field_is_rejected() {
        let spec = LineSpec::new("", "fantasy_points_ppr", "title");
        let csv = "season,fantasy_points_ppr\n2020,1\n";
        let table = PlayerTable::from_csv_reader("test", csv.as_bytes()).unwrap();
        assert!(matches!(
            render_line(&spec, table.batch()),
            Err(ViewError::Chart(crate::ChartSpecError::MissingField("x")))
        ));
    }
}
