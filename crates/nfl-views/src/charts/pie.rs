//! Pie chart, drawn directly with the egui painter

use std::f32::consts::{PI, TAU};
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2};
use nfl_data::GroupTotal;
use serde::Serialize;

use super::{colors, require};
use crate::{Block, ChartData, ViewError};

/// Names and values of a grouped total
#[derive(Debug, Clone, Default, Serialize)]
pub struct PieSpec {
    /// Field holding slice names
    pub names: String,

    /// Field holding slice sizes
    pub values: String,

    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub names_field: String,
    pub values_field: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    /// Sum of the drawable (positive) slice values
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).filter(|v| *v > 0.0).sum()
    }

    /// Share of the pie taken by slice `idx`, 0 for non-positive slices
    pub fn fraction(&self, idx: usize) -> f64 {
        let total = self.total();
        match self.slices.get(idx) {
            Some(slice) if slice.value > 0.0 && total > 0.0 => slice.value / total,
            _ => 0.0,
        }
    }
}

/// Resolve a pie spec against grouped totals, keeping their order
pub fn render_pie(spec: &PieSpec, totals: &[GroupTotal]) -> Result<Block, ViewError> {
    require(&spec.title, "title")?;
    require(&spec.names, "names")?;
    require(&spec.values, "values")?;

    let slices = totals
        .iter()
        .map(|t| PieSlice {
            label: t.key.to_string(),
            value: t.total,
        })
        .collect::<Vec<_>>();

    tracing::debug!("Pie '{}': {} slices", spec.title, slices.len());

    Ok(Block::Chart(ChartData::Pie(PieChart {
        title: spec.title.clone(),
        names_field: spec.names.clone(),
        values_field: spec.values.clone(),
        slices,
    })))
}

pub(crate) fn show(ui: &mut Ui, chart: &PieChart) {
    let height = 320.0;
    let (response, painter) = ui.allocate_painter(Vec2::new(ui.available_width(), height), Sense::hover());
    let rect = response.rect;

    if chart.total() <= 0.0 {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "No data to display",
            FontId::proportional(14.0),
            ui.visuals().weak_text_color(),
        );
        return;
    }

    let radius = (rect.height() / 2.0 - 12.0).min(rect.width() * 0.3).max(10.0);
    let center = Pos2::new(rect.left() + radius + 16.0, rect.center().y);

    let hovered = response
        .hover_pos()
        .and_then(|pos| slice_at(chart, center, radius, pos));

    // Clockwise from 12 o'clock
    let mut start = -PI / 2.0;
    for i in 0..chart.slices.len() {
        let sweep = chart.fraction(i) as f32 * TAU;
        if sweep <= 0.0 {
            continue;
        }
        let color = match hovered {
            Some(h) if h != i => colors::faded(colors::categorical_color(i), 0.6),
            _ => colors::categorical_color(i),
        };
        draw_wedge(&painter, center, radius, start, start + sweep, color);

        if chart.fraction(i) > 0.04 {
            let mid = start + sweep / 2.0;
            let pos = center + Vec2::new(mid.cos(), mid.sin()) * radius * 0.65;
            painter.text(
                pos,
                Align2::CENTER_CENTER,
                format!("{:.1}%", chart.fraction(i) * 100.0),
                FontId::proportional(12.0),
                Color32::WHITE,
            );
        }
        start += sweep;
    }

    // Legend
    let legend_left = center.x + radius + 32.0;
    let row_height = 18.0;
    let mut y = rect.top() + 12.0;
    for (i, slice) in chart.slices.iter().enumerate() {
        let swatch = Rect::from_min_size(Pos2::new(legend_left, y + 3.0), Vec2::splat(12.0));
        painter.rect_filled(swatch, 2.0, colors::categorical_color(i));
        painter.text(
            Pos2::new(legend_left + 18.0, y),
            Align2::LEFT_TOP,
            &slice.label,
            FontId::proportional(13.0),
            ui.visuals().text_color(),
        );
        y += row_height;
    }

    if let Some(i) = hovered {
        let slice = &chart.slices[i];
        response.on_hover_text_at_pointer(format!(
            "{}: {}\n{}: {:.1}\n{:.1}%",
            chart.names_field,
            slice.label,
            chart.values_field,
            slice.value,
            chart.fraction(i) * 100.0
        ));
    }
}

fn draw_wedge(painter: &egui::Painter, center: Pos2, radius: f32, start: f32, end: f32, color: Color32) {
    let segments = ((end - start) / TAU * 90.0).ceil().max(1.0) as usize;
    let step = (end - start) / segments as f32;
    for s in 0..segments {
        let a0 = start + step * s as f32;
        let a1 = a0 + step;
        let triangle = vec![
            center,
            center + Vec2::new(a0.cos(), a0.sin()) * radius,
            center + Vec2::new(a1.cos(), a1.sin()) * radius,
        ];
        painter.add(Shape::convex_polygon(triangle, color, Stroke::NONE));
    }
}

/// Index of the slice under `pos`, if any
fn slice_at(chart: &PieChart, center: Pos2, radius: f32, pos: Pos2) -> Option<usize> {
    let offset = pos - center;
    if offset.length() > radius {
        return None;
    }
    // Angle measured clockwise from 12 o'clock, in [0, TAU)
    let angle = (offset.y.atan2(offset.x) + PI / 2.0).rem_euclid(TAU);

    let mut start = 0.0;
    for i in 0..chart.slices.len() {
        let sweep = chart.fraction(i) as f32 * TAU;
        if sweep > 0.0 && angle >= start && angle < start + sweep {
            return Some(i);
        }
        start += sweep;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use nfl_data::GroupValue;

    fn totals() -> Vec<GroupTotal> {
        vec![
            GroupTotal { key: GroupValue::Text("A".to_string()), total: 300.0 },
            GroupTotal { key: GroupValue::Text("B".to_string()), total: 100.0 },
            GroupTotal { key: GroupValue::Text("C".to_string()), total: 0.0 },
        ]
    }

    fn chart() -> PieChart {
        let spec = PieSpec {
            names: "player_name".to_string(),
            values: "rushing_yards".to_string(),
            title: "Top 10 Players by Rushing Yards (All-Time)".to_string(),
        };
        match render_pie(&spec, &totals()).unwrap() {
            Block::Chart(ChartData::Pie(chart)) => chart,
            other => panic!("unexpected block: {other:?}"),
        }
    }

    #[test]
    fn test_slices_follow_totals() {
        let chart = chart();
        assert_eq!(chart.slices.len(), 3);
        assert_eq!(chart.slices[0].label, "A");
        assert_eq!(chart.fraction(0), 0.75);
        assert_eq!(chart.fraction(2), 0.0);
    }

    #[test]
    fn test_slice_hit_testing() {
        let chart = chart();
        let center = Pos2::new(100.0, 100.0);
        // Right of center is a quarter turn clockwise from the top, inside A
        assert_eq!(slice_at(&chart, center, 50.0, Pos2::new(140.0, 100.0)), Some(0));
        // Just left of the top is the last quarter, inside B
        assert_eq!(slice_at(&chart, center, 50.0, Pos2::new(90.0, 60.0)), Some(1));
        assert_eq!(slice_at(&chart, center, 50.0, Pos2::new(200.0, 100.0)), None);
    }

    #[test]
    fn test_missing_values_field_is_rejected() {
        let spec = PieSpec {
            names: "player_name".to_string(),
            values: String::new(),
            title: "t".to_string(),
        };
        assert!(matches!(
            render_pie(&spec, &totals()),
            Err(ViewError::Chart(crate::ChartSpecError::MissingField("values")))
        ));
    }
}
