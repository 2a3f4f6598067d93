use egui::{CentralPanel, Context, RichText};

use crate::theme;

/// Full-window error shown when the table could not be loaded
pub fn show_fatal_error(ctx: &Context, source: &str, message: &str) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.label(RichText::new("Could not load player data").size(28.0).color(theme::error_color()));
            ui.add_space(16.0);
            ui.label(source);
            ui.add_space(8.0);
            show_error_banner(ui, message);
            ui.add_space(16.0);
            ui.label(RichText::new("Restart the application to try again.").weak());
        });
    });
}

/// Inline error box, used for view-local failures
pub fn show_error_banner(ui: &mut egui::Ui, message: &str) {
    egui::Frame::none()
        .fill(theme::error_color().linear_multiply(0.2))
        .stroke(egui::Stroke::new(1.0, theme::error_color()))
        .rounding(4.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new("⚠").color(theme::error_color()));
                ui.label(message);
            });
        });
}

/// Informational box, e.g. for an empty search result
pub fn show_notice(ui: &mut egui::Ui, message: &str) {
    egui::Frame::none()
        .fill(theme::notice_color().linear_multiply(0.2))
        .stroke(egui::Stroke::new(1.0, theme::notice_color()))
        .rounding(4.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new("ℹ").color(theme::notice_color()));
                ui.label(message);
            });
        });
}
