//! Page renderers
//!
//! Each page is a pure function of the navigation state, the session table
//! and the settings. The UI calls [`render_page`] every frame and paints the
//! result, so nothing here keeps state between calls.

mod eda;
mod home;
mod insights;
mod prediction;

use nfl_core::{AppSettings, Page, ViewState};
use nfl_data::PlayerTable;

use crate::{Block, RenderTree, ViewError};

pub const APP_TITLE: &str = "NFL Player Performance Analysis";
pub const APP_SUBTITLE: &str = "Visualize key performance metrics for NFL players by season";

/// Shown when a name search matches no rows
pub const NO_MATCH_NOTICE: &str =
    "No data found for the specified player. Please check the spelling or try another player.";

/// Build the render tree for the current page
pub fn render_page(
    state: &ViewState,
    table: &PlayerTable,
    settings: &AppSettings,
) -> Result<RenderTree, ViewError> {
    let mut tree = RenderTree::new();
    tree.push(Block::Title(APP_TITLE.to_string()));
    tree.push(Block::Subtitle(APP_SUBTITLE.to_string()));
    tree.push(Block::Caption(format!("Data source: {}", table.source_name())));

    match state.page() {
        Page::Home => home::render(&mut tree),
        Page::Eda => eda::render(&mut tree, state, table, settings)?,
        Page::Insights => insights::render(&mut tree, state, table)?,
        Page::Prediction => prediction::render(&mut tree),
    }

    tracing::debug!(
        "Rendered {} page: {} main blocks, {} sidebar blocks",
        state.page().label(),
        tree.main.len(),
        tree.sidebar.len()
    );
    Ok(tree)
}

/// Append a chart section, or an error block if it could not be built.
/// Only session-ending failures propagate.
fn push_section(tree: &mut RenderTree, section: Result<Vec<Block>, ViewError>) -> Result<(), ViewError> {
    match section {
        Ok(blocks) => {
            tree.main.extend(blocks);
            Ok(())
        }
        Err(err) if err.is_fatal() => Err(err),
        Err(err) => {
            tracing::error!("Failed to build chart section: {}", err);
            tree.push(Block::Error(err.to_string()));
            Ok(())
        }
    }
}
