use nfl_core::{columns, GroupKey, Metric, ViewState};
use nfl_data::{totals_to_batch, PlayerTable};

use super::{push_section, NO_MATCH_NOTICE};
use crate::{render_line, Block, LineSpec, RenderTree, ViewError};

const SEARCH_HINT: &str =
    "Use the search bar above to look up a player's fantasy points and yards per game by season.";

pub(super) fn render(tree: &mut RenderTree, state: &ViewState, table: &PlayerTable) -> Result<(), ViewError> {
    tree.push(Block::Heading("Insights Page".to_string()));
    tree.push(Block::Text(
        "This page provides insights and analysis of player performance data.".to_string(),
    ));
    tree.push(Block::SearchInput {
        label: "Search for a player to view Fantasy Points and Yards per Game:".to_string(),
    });

    match state.inputs.search() {
        Some(query) => push_section(tree, player_section(table, query))?,
        None => tree.push(Block::Text(SEARCH_HINT.to_string())),
    }

    tree.push(Block::Subheading("Overall Fantasy Points (PPR) Over Seasons".to_string()));
    push_section(tree, overall_section(table))?;
    Ok(())
}

fn fantasy_spec(title: String) -> LineSpec {
    let metric = Metric::FantasyPointsPpr;
    LineSpec::new(columns::SEASON, metric.column(), title)
        .with_label(metric.column(), metric.label())
        .with_label(columns::SEASON, GroupKey::Season.label())
}

fn player_section(table: &PlayerTable, query: &str) -> Result<Vec<Block>, ViewError> {
    let matches = table.filter_by_name(query)?;
    if matches.is_empty() {
        tracing::warn!("No players match '{}'", query);
        return Ok(vec![Block::Notice(NO_MATCH_NOTICE.to_string())]);
    }

    let spec = fantasy_spec(format!("{} - Fantasy Points (PPR) by Season", query));
    Ok(vec![
        Block::Subheading(format!("Fantasy Points (PPR) for {} by Season", query)),
        render_line(&spec, matches.batch())?,
    ])
}

fn overall_section(table: &PlayerTable) -> Result<Vec<Block>, ViewError> {
    let metric = Metric::FantasyPointsPpr;
    let totals = table.season_aggregate(metric)?;
    let batch = totals_to_batch(&totals, GroupKey::Season, metric)?;

    let spec = fantasy_spec("Total Fantasy Points (PPR) by Season".to_string());
    Ok(vec![render_line(&spec, &batch)?])
}
