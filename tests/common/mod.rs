//! Shared test infrastructure for deck and sync tests.
//!
//! - `test_store()` - store holding a small two-slide deck
//! - `connect()` - register a fake viewer and keep its receiving end
//! - `init_app!` - actix test service with the full route table

#![allow(dead_code)]

use slides_web::deck::MarkdownRenderer;
use slides_web::store::DeckStore;
use slides_web::sync::{ConnectionId, ConnectionRegistry, outbound_queue};
use tokio::sync::mpsc::Receiver;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const TWO_SLIDES: &str = "# S1\n\n---\n\n# S2";

// ============================================================================
// SETUP
// ============================================================================

pub fn test_store() -> DeckStore {
    DeckStore::new(TWO_SLIDES, MarkdownRenderer::default())
}

/// A registered viewer as seen from the server side.
pub struct Viewer {
    pub id: ConnectionId,
    pub rx: Receiver<String>,
}

impl Viewer {
    /// All messages queued for this viewer so far.
    pub fn drain(&mut self) -> Vec<String> {
        let mut out = Vec::new();
        while let Ok(msg) = self.rx.try_recv() {
            out.push(msg);
        }
        out
    }
}

pub fn connect(registry: &ConnectionRegistry) -> Viewer {
    let (tx, rx) = outbound_queue();
    let id = registry.add(tx);
    Viewer { id, rx }
}

/// Build a test service with the given store and registry `web::Data`.
#[allow(unused_macros)]
macro_rules! init_app {
    ($store:expr, $registry:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data($store.clone())
                .app_data($registry.clone())
                .app_data(actix_web::web::Data::new(
                    slides_web::config::ServerConfig::default(),
                ))
                .app_data(slides_web::app::json_config(1024 * 1024))
                .configure(slides_web::app::configure),
        )
        .await
    };
}
#[allow(unused_imports)]
pub(crate) use init_app;
