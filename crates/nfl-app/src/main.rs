//! Main application entry point

use std::sync::Arc;
use anyhow::Result;
use eframe::egui::{self, Context};
use tracing::{error, info};

use nfl_core::{AppSettings, SourceConfig, ViewState};
use nfl_data::{DataSource, PlayerTable, SharedTable, SheetSource};
use nfl_ui::{panel_ids, NavigationPanel, Theme};
use nfl_views::{render_page, RenderTree};

/// Why the session has no table
#[derive(Debug, Clone)]
struct LoadFailure {
    source: String,
    message: String,
}

/// Fetch the table once, blocking until the source answers
fn load_session(runtime: &tokio::runtime::Runtime, source: &dyn DataSource) -> Result<SharedTable, LoadFailure> {
    match runtime.block_on(source.load()) {
        Ok(table) => Ok(Arc::new(table)),
        Err(err) => {
            error!("Failed to load {}: {}", source.source_name(), err);
            Err(LoadFailure {
                source: source.source_name().to_string(),
                message: err.to_string(),
            })
        }
    }
}

/// Render tree for the current state, rebuilt lazily after invalidation
#[derive(Default)]
struct PageCache {
    rendered: Option<Result<RenderTree, String>>,
}

impl PageCache {
    /// The tree for `state`, rendering it first if the cache is stale
    fn tree(&mut self, state: &ViewState, table: &PlayerTable, settings: &AppSettings) -> &Result<RenderTree, String> {
        self.rendered.get_or_insert_with(|| {
            render_page(state, table, settings).map_err(|err| {
                error!("Failed to render {} page: {}", state.page().label(), err);
                err.to_string()
            })
        })
    }

    fn invalidate(&mut self) {
        self.rendered = None;
    }
}

/// Main application state
struct NflExplorerApp {
    /// The session's table, or why it could not be loaded
    session: Result<SharedTable, LoadFailure>,

    state: ViewState,
    settings: AppSettings,
    navigation: NavigationPanel,
    sidebar_open: bool,
    cache: PageCache,
}

impl NflExplorerApp {
    fn new(cc: &eframe::CreationContext<'_>, session: Result<SharedTable, LoadFailure>, settings: AppSettings) -> Self {
        nfl_ui::apply_theme(&cc.egui_ctx, &Theme { dark_mode: settings.dark_mode });

        Self {
            session,
            state: ViewState::new(),
            sidebar_open: settings.page.sidebar_expanded,
            settings,
            navigation: NavigationPanel::new(),
            cache: PageCache::default(),
        }
    }
}

impl eframe::App for NflExplorerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let table = match &self.session {
            Ok(table) => Arc::clone(table),
            Err(failure) => {
                nfl_ui::show_fatal_error(ctx, &failure.source, &failure.message);
                return;
            }
        };

        let Self {
            state,
            settings,
            navigation,
            sidebar_open,
            cache,
            ..
        } = self;

        egui::SidePanel::left(panel_ids::SIDEBAR)
            .resizable(true)
            .default_width(260.0)
            .show_animated(ctx, *sidebar_open, |ui| {
                ui.add_space(8.0);
                if navigation.ui(ui, state) {
                    cache.invalidate();
                }
                ui.separator();
                let page = state.page();
                let changed = match cache.tree(state, &table, settings) {
                    Ok(tree) => nfl_ui::paint_sidebar(ui, page, tree, &mut state.inputs, settings),
                    Err(_) => false,
                };
                if changed {
                    cache.invalidate();
                }
            });

        // Inputs changed in the sidebar are picked up by this same frame
        egui::CentralPanel::default().show(ctx, |ui| {
            let toggle = if *sidebar_open { "⏴" } else { "☰" };
            if ui.button(toggle).on_hover_text("Toggle sidebar").clicked() {
                *sidebar_open = !*sidebar_open;
            }
            let page = state.page();
            let changed = match cache.tree(state, &table, settings) {
                Ok(tree) => nfl_ui::paint_main(ui, page, tree, &mut state.inputs, settings),
                Err(message) => {
                    nfl_ui::show_error_banner(ui, message);
                    false
                }
            };
            if changed {
                cache.invalidate();
                ctx.request_repaint();
            }
        });
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting NFL player performance explorer");

    let config = SourceConfig::default();
    let settings = AppSettings::default();
    let runtime = tokio::runtime::Runtime::new()?;

    let source = SheetSource::new(&config)?;
    info!("Data source: {}", source.url());
    let session = load_session(&runtime, &source);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.page.title.clone())
            .with_inner_size(settings.page.inner_size)
            .with_min_inner_size(settings.page.min_inner_size),
        default_theme: if settings.dark_mode { eframe::Theme::Dark } else { eframe::Theme::Light },
        ..Default::default()
    };

    let title = settings.page.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Box::new(NflExplorerApp::new(cc, session, settings))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
