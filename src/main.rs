mod app;
mod config;
mod error;
mod input;
mod io;
mod message;
mod model;
mod state;
mod style;
mod view;

use app::DegreeNavigator;
use config::Config;
use eframe::egui;
use io::SystemOpener;
use model::Catalog;
use state::UIState;
use tracing_subscriber::EnvFilter;

/// Use the configured catalog file if there is one, falling back to the
/// built-in catalog when it cannot be loaded.
fn load_catalog(config: &Config) -> Result<Catalog, error::CatalogError> {
    if let Some(path) = &config.catalog.path {
        match Catalog::load(path) {
            Ok(catalog) => {
                tracing::info!(path = %path.display(), "loaded catalog");
                return Ok(catalog);
            }
            Err(e) => {
                tracing::warn!(error = %e, "falling back to built-in catalog");
            }
        }
    }
    Catalog::embedded()
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = Config::create_default() {
        tracing::warn!(error = %e, "could not write default config");
    }
    let config = Config::load();

    let catalog = match load_catalog(&config) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(error = %e, "no usable catalog");
            std::process::exit(1);
        }
    };

    let opener = SystemOpener::new(config.documents.root.clone());
    let ui = UIState::new(
        style::Theme::from_config(&config.theme.mode),
        config.ui.notice_timeout_secs,
    );
    let app = DegreeNavigator::new(catalog, opener, ui);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("Design Your Degree"),
        ..Default::default()
    };

    eframe::run_native(
        "Design Your Degree",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
