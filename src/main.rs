mod app;

use app::{VocabApp, install_fonts};
use tracing_subscriber::EnvFilter;
use vocab_notes_app::config::AppConfig;
use vocab_notes_app::storage::SqliteStore;

fn main() -> eframe::Result<()> {
    let config = AppConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_target(false)
        .init();

    let store = match SqliteStore::open(&config.database_path) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(
                database = %config.database_path.display(),
                error = %e,
                "failed to open vocabulary database"
            );
            std::process::exit(1);
        }
    };

    tracing::info!(
        database = %config.database_path.display(),
        "starting vocab notes"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([960.0, 720.0]),
        ..Default::default()
    };
    let font_path = config.font_path.clone();

    eframe::run_native(
        "Vocab Notes",
        options,
        Box::new(move |cc| {
            if let Some(path) = &font_path {
                if let Err(e) = install_fonts(&cc.egui_ctx, path) {
                    tracing::warn!(path = %path.display(), error = %e, "could not load font");
                }
            }
            Ok(Box::new(VocabApp::new(store)))
        }),
    )
}
