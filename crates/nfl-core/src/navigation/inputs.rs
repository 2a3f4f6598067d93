use serde::{Serialize, Deserialize};

use crate::Metric;

/// Inputs owned by the active page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewInputs {
    /// Player search text, matched as a case-insensitive substring
    pub query: String,

    /// Metric chosen in the EDA selector
    pub metric: Metric,
}

impl ViewInputs {
    /// Search text, `None` when the box is empty
    pub fn search(&self) -> Option<&str> {
        if self.query.is_empty() { None } else { Some(&self.query) }
    }
}
