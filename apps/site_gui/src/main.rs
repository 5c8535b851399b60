use std::path::PathBuf;

mod controller;
mod ui;

use clap::Parser;
use eframe::egui;
use site_core::{load_settings, load_settings_from};
use tracing_subscriber::EnvFilter;

use crate::ui::{PersistedViewSettings, PortfolioApp, SETTINGS_STORAGE_KEY};

#[derive(Parser, Debug)]
#[command(about = "Portfolio site rendered as a single scrollable window")]
struct Args {
    /// Site settings file; defaults to ./site.toml when present.
    #[arg(long)]
    settings: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let settings = match &args.settings {
        Some(path) => load_settings_from(path),
        None => load_settings(),
    };
    if let Err(err) = settings.validate() {
        tracing::warn!("site settings are invalid; affected links will report errors: {err}");
    }
    tracing::info!(owner = %settings.owner_name, "starting portfolio site");

    let title = format!("{} • Portfolio", settings.owner_name);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size([1200.0, 860.0])
            .with_min_inner_size([420.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(|cc| {
            let persisted = cc.storage.and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|raw| serde_json::from_str::<PersistedViewSettings>(&raw).ok())
            });
            Ok(Box::new(PortfolioApp::new(settings, persisted)))
        }),
    )
}
