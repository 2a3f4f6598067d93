//! Scatter chart

use std::collections::BTreeMap;
use ahash::AHashMap;
use arrow::record_batch::RecordBatch;
use egui::Ui;
use egui_plot::{Legend, Plot, PlotPoints, Points};
use nfl_core::AppSettings;
use nfl_data::{column_f64, column_labels};
use serde::Serialize;

use super::{axis_label, colors, require};
use crate::{Block, ChartData, ViewError};

/// Which fields of a table to plot
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScatterSpec {
    pub x: String,
    pub y: String,

    /// One series per distinct value of this field
    pub color: Option<String>,

    /// Field shown when hovering a point
    pub hover_name: Option<String>,

    pub title: String,

    /// Display labels keyed by field name
    pub labels: BTreeMap<String, String>,
}

/// Points sharing one color
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub name: String,
    pub points: Vec<[f64; 2]>,

    /// Hover text per point, same length as `points`
    pub hover: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ScatterSeries>,
}

impl ScatterChart {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

/// Resolve a scatter spec against `data`.
///
/// Rows with a null x or y are skipped. Series follow the order in which
/// their color value first appears.
pub fn render_scatter(spec: &ScatterSpec, data: &RecordBatch) -> Result<Block, ViewError> {
    require(&spec.title, "title")?;
    require(&spec.x, "x")?;
    require(&spec.y, "y")?;

    let xs = column_f64(data, &spec.x)?;
    let ys = column_f64(data, &spec.y)?;
    let color_values = spec
        .color
        .as_deref()
        .map(|field| column_labels(data, field))
        .transpose()?;
    let hovers = spec
        .hover_name
        .as_deref()
        .map(|field| column_labels(data, field))
        .transpose()?;

    let mut series: Vec<ScatterSeries> = Vec::new();
    let mut index_of: AHashMap<String, usize> = AHashMap::new();

    for (row, (x, y)) in xs.iter().zip(ys.iter()).enumerate() {
        let (Some(x), Some(y)) = (x, y) else { continue };

        let name = match &color_values {
            Some(values) => values[row].clone().unwrap_or_default(),
            None => axis_label(&spec.labels, &spec.y),
        };
        let hover = match &hovers {
            Some(values) => values[row].clone().unwrap_or_default(),
            None => name.clone(),
        };

        let idx = *index_of.entry(name.clone()).or_insert_with(|| {
            series.push(ScatterSeries {
                name,
                points: Vec::new(),
                hover: Vec::new(),
            });
            series.len() - 1
        });
        series[idx].points.push([x, y]);
        series[idx].hover.push(hover);
    }

    let chart = ScatterChart {
        title: spec.title.clone(),
        x_label: axis_label(&spec.labels, &spec.x),
        y_label: axis_label(&spec.labels, &spec.y),
        series,
    };
    tracing::debug!(
        "Scatter '{}': {} points in {} series",
        chart.title,
        chart.point_count(),
        chart.series.len()
    );
    Ok(Block::Chart(ChartData::Scatter(chart)))
}

pub(crate) fn show(ui: &mut Ui, id: &str, chart: &ScatterChart, settings: &AppSettings) {
    let show_legend = chart.series.len() <= settings.max_legend_entries;
    let x_label = chart.x_label.clone();
    let y_label = chart.y_label.clone();
    let series = chart.series.clone();

    let mut plot = Plot::new(id)
        .height(360.0)
        .x_axis_label(chart.x_label.as_str())
        .y_axis_label(chart.y_label.as_str())
        .label_formatter(move |name, value| {
            if name.is_empty() {
                String::new()
            } else {
                let hover = hover_text(&series, name, [value.x, value.y]).unwrap_or(name);
                format!("{}\n{}: {:.0}\n{}: {:.1}", hover, x_label, value.x, y_label, value.y)
            }
        });
    if show_legend {
        plot = plot.legend(Legend::default());
    }

    plot.show(ui, |plot_ui| {
        for (i, series) in chart.series.iter().enumerate() {
            let points = Points::new(PlotPoints::new(series.points.clone()))
                .color(colors::categorical_color(i))
                .radius(settings.point_radius)
                .name(&series.name);
            plot_ui.points(points);
        }
    });
}

/// Hover text of the point at `at` in the series called `name`
fn hover_text<'a>(series: &'a [ScatterSeries], name: &str, at: [f64; 2]) -> Option<&'a str> {
    let series = series.iter().find(|s| s.name == name)?;
    let idx = series.points.iter().position(|p| *p == at)?;
    series.hover.get(idx).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nfl_data::{DataError, PlayerTable};

    fn table() -> PlayerTable {
        let csv = "player_name,season,rushing_yards\n\
                   A,2019,10\n\
                   B,2019,\n\
                   A,2020,30\n\
                   C,2020,5\n";
        PlayerTable::from_csv_reader("test", csv.as_bytes()).unwrap()
    }

    fn spec() -> ScatterSpec {
        ScatterSpec {
            x: "season".to_string(),
            y: "rushing_yards".to_string(),
            color: Some("player_name".to_string()),
            hover_name: Some("player_name".to_string()),
            title: "Rushing Yards Over Seasons".to_string(),
            labels: BTreeMap::from([("rushing_yards".to_string(), "Rushing Yards".to_string())]),
        }
    }

    #[test]
    fn test_series_per_color_in_appearance_order() {
        let block = render_scatter(&spec(), table().batch()).unwrap();
        let Block::Chart(ChartData::Scatter(chart)) = block else {
            panic!("expected a scatter chart");
        };
        let names: Vec<_> = chart.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert_eq!(chart.series[0].points, vec![[2019.0, 10.0], [2020.0, 30.0]]);
        assert_eq!(chart.y_label, "Rushing Yards");
        assert_eq!(chart.x_label, "season");
    }

    #[test]
    fn test_missing_title_is_rejected() {
        let mut spec = spec();
        spec.title.clear();
        match render_scatter(&spec, table().batch()) {
            Err(ViewError::Chart(crate::ChartSpecError::MissingField(field))) => assert_eq!(field, "title"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_missing_column_is_reported() {
        let mut spec = spec();
        spec.y = "passing_yards".to_string();
        let err = render_scatter(&spec, table().batch()).unwrap_err();
        assert!(matches!(err, ViewError::Data(DataError::MissingColumn(ref c)) if c == "passing_yards"));
    }

    #[test]
    fn test_without_color_everything_is_one_series() {
        let mut spec = spec();
        spec.color = None;
        spec.hover_name = None;
        let Block::Chart(ChartData::Scatter(chart)) = render_scatter(&spec, table().batch()).unwrap() else {
            panic!("expected a scatter chart");
        };
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.point_count(), 3);
    }
}
