//! User interface components for the NFL explorer
//!
//! This crate provides the egui side of the dashboard: the theme, the sidebar
//! navigation, and the painter that turns a render tree into widgets.

pub mod navigation_panel;
pub mod render;
pub mod shell;
pub mod theme;
pub mod widget_utils;

/// Re-export commonly used types
pub use navigation_panel::NavigationPanel;
pub use render::{paint_main, paint_sidebar};
pub use shell::{show_error_banner, show_fatal_error, show_notice};
pub use theme::{Theme, apply_theme};
pub use widget_utils::{WidgetId, widget_id};

// Panel IDs
pub mod panel_ids {
    pub const SIDEBAR: &str = "sidebar_panel";
    pub const MAIN_SCROLL: &str = "main_scroll";
}
