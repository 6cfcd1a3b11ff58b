use anyhow::Result;
use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use text_editor::{Cli, EditorApp, FatalError};
use text_editor_core::editor::APP_TITLE;

const DEFAULT_LOG_FILTER: &str = "text_editor=info,text_editor_core=info";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([cli.width, cli.height])
            .with_title(APP_TITLE),
        ..Default::default()
    };

    let mode = cli.theme_mode();
    tracing::info!(theme = mode.name(), "starting editor");

    let fatal = FatalError::default();
    let app_fatal = fatal.clone();
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(EditorApp::new(mode, app_fatal)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run the editor window: {e}"))?;

    // A failed save closes the window; report it as the process error.
    let fatal = fatal.borrow_mut().take();
    match fatal {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
