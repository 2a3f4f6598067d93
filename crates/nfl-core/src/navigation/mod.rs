use serde::{Serialize, Deserialize};

mod inputs;

pub use inputs::ViewInputs;

/// Pages selectable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    Home,
    Eda,
    Insights,
    /// Placeholder, no computation
    Prediction,
}

impl Page {
    /// Sidebar order
    pub const ALL: [Page; 4] = [Page::Home, Page::Eda, Page::Insights, Page::Prediction];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Eda => "EDA",
            Page::Insights => "Insights",
            Page::Prediction => "Prediction",
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::Home
    }
}

/// Current page plus the inputs that belong to it.
///
/// Inputs never survive a page switch: the only thing shared between pages is
/// the loaded table, which lives outside this struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    page: Page,
    pub inputs: ViewInputs,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Switch to `page`. Returns true if the page changed.
    pub fn navigate(&mut self, page: Page) -> bool {
        if self.page == page {
            return false;
        }
        tracing::debug!("Navigation {:?} -> {:?}", self.page, page);
        self.page = page;
        self.inputs = ViewInputs::default();
        true
    }
}
