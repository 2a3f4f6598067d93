//! Sidebar page selector

use egui::{RichText, Ui};
use nfl_core::{Page, ViewState};

/// Heading above the page list
pub const NAVIGATION_TITLE: &str = "Navigation";

/// Radio list of pages
#[derive(Default)]
pub struct NavigationPanel;

impl NavigationPanel {
    pub fn new() -> Self {
        Self
    }

    /// Show the page list. Returns true when the page changed this frame.
    pub fn ui(&self, ui: &mut Ui, state: &mut ViewState) -> bool {
        ui.label(RichText::new(NAVIGATION_TITLE).strong());
        let mut selected = state.page();
        for page in Page::ALL {
            ui.radio_value(&mut selected, page, page.label());
        }
        state.navigate(selected)
    }
}
