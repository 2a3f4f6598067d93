use crate::{Block, RenderTree};

const WELCOME: &str = "Welcome to the NFL Player Performance Analysis App!";

const INTRO: &str = "This interactive application provides a comprehensive view of NFL player \
statistics, allowing you to dive deep into various performance metrics across seasons. Whether \
you're an NFL enthusiast, fantasy football player, or data analyst, this app is designed to give \
you insights into player performance trends, key metrics, and fantasy points analysis.";

const GET_STARTED: &str = "Use the menu on the left to get started\u{2014}explore player stats, \
analyze trends, and make data-driven predictions for future seasons.";

pub(super) fn render(tree: &mut RenderTree) {
    tree.push(Block::Heading(WELCOME.to_string()));
    tree.push(Block::Text(INTRO.to_string()));
    tree.push(Block::Text(GET_STARTED.to_string()));
}
