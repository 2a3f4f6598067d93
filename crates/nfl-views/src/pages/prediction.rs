use crate::{Block, RenderTree};

pub(super) fn render(tree: &mut RenderTree) {
    tree.push(Block::Heading("Prediction Page".to_string()));
    tree.push(Block::Text(
        "This page will offer predictive analysis based on historical data.".to_string(),
    ));
}
