//! Paint a render tree and bind its input controls
//!
//! Input blocks write straight into the page's `ViewInputs`; the next frame
//! re-renders the page from the updated inputs.

use egui::{ComboBox, RichText, ScrollArea, Ui};
use nfl_core::{AppSettings, Page, ViewInputs};
use nfl_views::{show_chart, Block, RenderTree};

use crate::{panel_ids, shell, theme, widget_id, WidgetId};

/// Paint the sidebar blocks. Returns true if an input changed.
pub fn paint_sidebar(ui: &mut Ui, page: Page, tree: &RenderTree, inputs: &mut ViewInputs, settings: &AppSettings) -> bool {
    paint_blocks(ui, page, "sidebar", &tree.sidebar, inputs, settings)
}

/// Paint the main area in a scroll view. Returns true if an input changed.
pub fn paint_main(ui: &mut Ui, page: Page, tree: &RenderTree, inputs: &mut ViewInputs, settings: &AppSettings) -> bool {
    ScrollArea::vertical()
        .id_source(widget_id(panel_ids::MAIN_SCROLL, page.label()))
        .auto_shrink([false, false])
        .show(ui, |ui| paint_blocks(ui, page, "main", &tree.main, inputs, settings))
        .inner
}

fn paint_blocks(
    ui: &mut Ui,
    page: Page,
    area: &str,
    blocks: &[Block],
    inputs: &mut ViewInputs,
    settings: &AppSettings,
) -> bool {
    let mut changed = false;

    for (idx, block) in blocks.iter().enumerate() {
        match block {
            Block::Title(text) => {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(text).size(40.0).strong().color(theme::title_color()));
                });
            }
            Block::Subtitle(text) => {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(text).size(22.0).color(theme::subtitle_color()));
                });
            }
            Block::Heading(text) => {
                ui.add_space(8.0);
                ui.heading(text);
            }
            Block::Subheading(text) => {
                ui.add_space(6.0);
                ui.label(RichText::new(text).size(17.0).strong());
            }
            Block::Text(text) => {
                ui.label(text);
            }
            Block::Caption(text) => {
                ui.label(RichText::new(text).small().weak());
            }
            Block::Notice(text) => shell::show_notice(ui, text),
            Block::Error(text) => shell::show_error_banner(ui, text),
            Block::SearchInput { label } => {
                ui.label(label);
                let response = ui.add(
                    egui::TextEdit::singleline(&mut inputs.query)
                        .id(WidgetId::new(page.label()).with("search").id())
                        .desired_width(320.0),
                );
                if response.changed() {
                    tracing::debug!("Search query is now '{}'", inputs.query);
                    changed = true;
                }
            }
            Block::MetricSelect { label, options, selected } => {
                ui.label(label);
                let before = inputs.metric;
                ComboBox::from_id_source(WidgetId::new(page.label()).with("metric").build())
                    .selected_text(selected.label())
                    .show_ui(ui, |ui| {
                        for metric in options {
                            ui.selectable_value(&mut inputs.metric, *metric, metric.label());
                        }
                    });
                if inputs.metric != before {
                    tracing::debug!("Metric is now {}", inputs.metric);
                    changed = true;
                }
            }
            Block::Chart(chart) => {
                let id = WidgetId::new(page.label()).with(area).with("chart").index(idx);
                ui.push_id(id.id(), |ui| {
                    show_chart(ui, &id.build(), chart, settings);
                });
                ui.add_space(12.0);
            }
        }
    }

    changed
}
