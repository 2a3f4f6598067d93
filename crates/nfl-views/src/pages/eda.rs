//! Exploratory page: per-season scatter of one metric plus the all-time top players

use std::collections::BTreeMap;
use nfl_core::{columns, AppSettings, GroupKey, Metric, ViewState};
use nfl_data::PlayerTable;

use super::{push_section, NO_MATCH_NOTICE};
use crate::{render_pie, render_scatter, Block, PieSpec, RenderTree, ScatterSpec, ViewError};

pub(super) fn render(
    tree: &mut RenderTree,
    state: &ViewState,
    table: &PlayerTable,
    settings: &AppSettings,
) -> Result<(), ViewError> {
    let metric = state.inputs.metric;

    tree.push_sidebar(Block::MetricSelect {
        label: "Select a metric to visualize:".to_string(),
        options: Metric::SELECTABLE.to_vec(),
        selected: metric,
    });

    tree.push(Block::Text(format!("Scatter Plot of {} by Season", metric.label())));
    tree.push(Block::SearchInput {
        label: "Search for a player:".to_string(),
    });
    push_section(tree, scatter_section(state, table, metric))?;

    tree.push(Block::Text(format!(
        "Top {} Players in {} (All-Time)",
        settings.top_n,
        metric.label()
    )));
    push_section(tree, top_players_section(table, metric, settings.top_n))?;

    Ok(())
}

fn scatter_section(state: &ViewState, table: &PlayerTable, metric: Metric) -> Result<Vec<Block>, ViewError> {
    let matches = table.filter_by_name(&state.inputs.query)?;
    if let Some(query) = state.inputs.search() {
        if matches.is_empty() {
            tracing::warn!("No players match '{}'", query);
            return Ok(vec![Block::Notice(NO_MATCH_NOTICE.to_string())]);
        }
    }

    let positive = matches.filter_positive_metric(metric)?;
    let spec = ScatterSpec {
        x: columns::SEASON.to_string(),
        y: metric.column().to_string(),
        color: Some(columns::PLAYER_NAME.to_string()),
        hover_name: Some(columns::PLAYER_NAME.to_string()),
        title: format!("{} Over Seasons", metric.label()),
        labels: BTreeMap::from([
            (columns::SEASON.to_string(), GroupKey::Season.label().to_string()),
            (metric.column().to_string(), metric.label().to_string()),
        ]),
    };
    Ok(vec![render_scatter(&spec, positive.batch())?])
}

fn top_players_section(table: &PlayerTable, metric: Metric, n: usize) -> Result<Vec<Block>, ViewError> {
    let top = table.top_n(metric, GroupKey::PlayerName, n)?;
    let spec = PieSpec {
        names: columns::PLAYER_NAME.to_string(),
        values: metric.column().to_string(),
        title: format!("Top {} Players by {} (All-Time)", n, metric.label()),
    };
    Ok(vec![render_pie(&spec, &top)?])
}
