//! Route table and app-level wiring shared by the server and tests.

use std::path::Path;

use actix_web::{HttpResponse, error, web};

use crate::config::ServerConfig;
use crate::deck::MarkdownRenderer;
use crate::errors::AppError;
use crate::handlers::{deck_handlers, ui_handlers, ws};
use crate::store::DeckStore;

/// Mount the API and real-time routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/load", web::post().to(deck_handlers::load))
        .route("/api/slides", web::get().to(deck_handlers::slides))
        .route("/api/export/pdf", web::get().to(deck_handlers::export_pdf))
        .route("/ws", web::get().to(ws::ws_connect))
        .route("/", web::get().to(ui_handlers::index));
}

/// Serve `/static` from `dir`. Skipped when the directory does not exist.
pub fn configure_static(cfg: &mut web::ServiceConfig, dir: &Path) {
    if dir.is_dir() {
        cfg.service(actix_files::Files::new("/static", dir));
    }
}

/// JSON extractor settings: body size limit and a JSON 400 for bad bodies.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default().limit(limit).error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(serde_json::json!({
            "error": err.to_string(),
        }));
        error::InternalError::from_response(err, response).into()
    })
}

/// Build the startup store: the configured deck file, or the demo deck if
/// none is configured or it cannot be read.
pub fn initial_store(config: &ServerConfig) -> DeckStore {
    let renderer = MarkdownRenderer::new(&config.code_theme);
    let Some(path) = &config.deck_file else {
        return DeckStore::with_demo(renderer);
    };
    match read_deck_file(path) {
        Ok(source) => {
            log::info!("Presenting {}", path.display());
            DeckStore::new(source, renderer)
        }
        Err(e) => {
            log::warn!("Could not read {}: {e}, using demo deck", path.display());
            DeckStore::with_demo(renderer)
        }
    }
}

/// Read a Markdown deck from disk.
pub fn read_deck_file(path: &Path) -> Result<String, AppError> {
    Ok(std::fs::read_to_string(path)?)
}
