use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::errors::AppError;
use crate::store::{DeckStore, Snapshot};
use crate::sync::{self, ConnectionRegistry};

/// Response header carrying the version of the deck in the body.
pub const VERSION_HEADER: &str = "x-deck-version";

/// Body of `POST /api/load`.
#[derive(Deserialize, Debug)]
pub struct LoadRequest {
    pub content: String,
    /// When set, the load only succeeds if the current deck still has this version.
    #[serde(default)]
    pub expected_version: Option<u64>,
}

fn deck_response(snapshot: &Snapshot) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((VERSION_HEADER, snapshot.version.to_string()))
        .json(&snapshot.deck)
}

/// POST /api/load - replace the current deck and push it to every viewer.
pub async fn load(
    store: web::Data<DeckStore>,
    registry: web::Data<ConnectionRegistry>,
    body: web::Json<LoadRequest>,
) -> Result<HttpResponse, AppError> {
    let LoadRequest {
        content,
        expected_version,
    } = body.into_inner();

    let snapshot = match expected_version {
        Some(expected) => store
            .compare_and_load(expected, content)
            .map_err(|current| AppError::VersionConflict {
                expected,
                current: current.version,
            })?,
        None => store.load(content),
    };

    let delivered = sync::publish_reload(&registry, &snapshot.deck);
    if snapshot.deck.is_empty() {
        log::warn!("Loaded deck v{} has no slides", snapshot.version);
    }
    log::info!(
        "Loaded deck v{} \"{}\" ({} slides), reload sent to {} connection(s)",
        snapshot.version,
        snapshot.deck.title().unwrap_or("untitled"),
        snapshot.deck.total,
        delivered
    );

    Ok(deck_response(&snapshot))
}

/// GET /api/slides - the current deck.
pub async fn slides(store: web::Data<DeckStore>) -> HttpResponse {
    deck_response(&store.current())
}

/// GET /api/export/pdf - server-side export is not offered.
pub async fn export_pdf() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "not_implemented",
        "message": "Use the browser Print dialog (Ctrl+P) with @media print styles for PDF export.",
    }))
}
