//! Application settings

/// Window-level settings
#[derive(Debug, Clone)]
pub struct PageConfig {
    pub title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],

    /// Whether the sidebar starts expanded
    pub sidebar_expanded: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "NFL Player Performance".to_string(),
            inner_size: [1400.0, 900.0],
            min_inner_size: [900.0, 600.0],
            sidebar_expanded: true,
        }
    }
}

/// Application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub page: PageConfig,

    /// Whether to use dark mode
    pub dark_mode: bool,

    /// Number of groups in the all-time pie chart
    pub top_n: usize,

    /// Scatter plots with more series than this hide the legend
    pub max_legend_entries: usize,

    /// Scatter marker radius
    pub point_radius: f32,

    /// Line chart stroke width
    pub line_width: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            page: PageConfig::default(),
            dark_mode: true,
            top_n: 10,
            max_legend_entries: 25,
            point_radius: 3.0,
            line_width: 2.0,
        }
    }
}
