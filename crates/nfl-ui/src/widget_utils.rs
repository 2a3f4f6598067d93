//! Widget ID helpers
//!
//! Charts and scroll areas are rebuilt every frame from the render tree, so
//! their IDs are derived from the page and the block position.

use egui::Id;
use std::fmt::Display;

/// Widget ID builder that combines several components
pub struct WidgetId {
    components: Vec<String>,
}

impl WidgetId {
    pub fn new(base: impl Display) -> Self {
        Self {
            components: vec![base.to_string()],
        }
    }

    pub fn with(mut self, component: impl Display) -> Self {
        self.components.push(component.to_string());
        self
    }

    /// Add an index (useful in loops)
    pub fn index(self, idx: usize) -> Self {
        self.with(format!("idx_{}", idx))
    }

    pub fn build(&self) -> String {
        self.components.join("_")
    }

    pub fn id(&self) -> Id {
        Id::new(self.build())
    }
}

/// Two-part widget ID
pub fn widget_id(base: impl Display, suffix: impl Display) -> String {
    format!("{}_{}", base, suffix)
}
