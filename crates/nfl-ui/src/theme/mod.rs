use egui::{Context, Visuals, Style, Color32, Rounding, Stroke, FontId, FontFamily, TextStyle};
use std::collections::BTreeMap;

/// Theme configuration
pub struct Theme {
    pub dark_mode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

/// Apply the application theme
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    let mut style = Style::default();
    let mut visuals = if theme.dark_mode { Visuals::dark() } else { Visuals::light() };

    if theme.dark_mode {
        let bg_color = Color32::from_rgb(14, 17, 23);
        let panel_bg = Color32::from_rgb(22, 26, 34);
        let widget_bg = Color32::from_rgb(38, 39, 48);
        let hover_color = Color32::from_rgb(48, 50, 62);
        let text_color = Color32::from_rgb(230, 230, 235);

        visuals.window_fill = panel_bg;
        visuals.panel_fill = bg_color;
        visuals.extreme_bg_color = widget_bg;
        visuals.faint_bg_color = panel_bg;

        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text_color);
        visuals.widgets.inactive.bg_fill = widget_bg;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text_color);
        visuals.widgets.hovered.bg_fill = hover_color;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, text_color);
    }

    for widget in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
    ] {
        widget.rounding = Rounding::same(4.0);
    }
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, accent_color());

    // Selection and highlighting
    visuals.selection.bg_fill = accent_color().linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, accent_color());
    visuals.hyperlink_color = accent_color();

    // Apply spacing
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    style.spacing.indent = 20.0;

    // Font sizes
    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(11.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(22.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(12.0, FontFamily::Monospace));
    style.text_styles = font_sizes;

    ctx.set_style(style);
    ctx.set_visuals(visuals);
}

/// Page title color (Dodger Blue)
pub fn title_color() -> Color32 {
    Color32::from_rgb(30, 144, 255)
}

/// Page subtitle color (Steel Blue)
pub fn subtitle_color() -> Color32 {
    Color32::from_rgb(70, 130, 180)
}

pub fn accent_color() -> Color32 {
    Color32::from_rgb(100, 150, 250)
}

pub fn error_color() -> Color32 {
    Color32::from_rgb(230, 80, 80)
}

/// Background tint for informational notices
pub fn notice_color() -> Color32 {
    Color32::from_rgb(70, 130, 180)
}
