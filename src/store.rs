use std::sync::{Arc, RwLock};

use crate::deck::{self, Deck, MarkdownRenderer};

/// One immutable generation of the current deck.
#[derive(Debug)]
pub struct Snapshot {
    pub version: u64,
    pub source: String,
    pub deck: Deck,
}

/// Holder of the single current deck.
///
/// Readers get an `Arc` to a complete snapshot, so a load is atomic from
/// their point of view. Parsing happens before the write lock is taken.
pub struct DeckStore {
    current: RwLock<Arc<Snapshot>>,
    renderer: MarkdownRenderer,
}

impl DeckStore {
    /// Create a store holding `source` as version 1.
    pub fn new(source: impl Into<String>, renderer: MarkdownRenderer) -> Self {
        let source = source.into();
        let deck = deck::parse_with(&source, &renderer);
        Self {
            current: RwLock::new(Arc::new(Snapshot {
                version: 1,
                source,
                deck,
            })),
            renderer,
        }
    }

    /// Store preloaded with the built-in demo presentation.
    pub fn with_demo(renderer: MarkdownRenderer) -> Self {
        Self::new(deck::DEMO_MARKDOWN, renderer)
    }

    /// The current snapshot.
    pub fn current(&self) -> Arc<Snapshot> {
        self.current.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Replace the current document unconditionally.
    pub fn load(&self, source: impl Into<String>) -> Arc<Snapshot> {
        let source = source.into();
        let deck = deck::parse_with(&source, &self.renderer);
        let mut current = self.current.write().unwrap_or_else(|e| e.into_inner());
        let next = Arc::new(Snapshot {
            version: current.version + 1,
            source,
            deck,
        });
        *current = next.clone();
        next
    }

    /// Replace the current document only if its version is still `expected`.
    /// On mismatch the current snapshot is returned as the error.
    pub fn compare_and_load(
        &self,
        expected: u64,
        source: impl Into<String>,
    ) -> Result<Arc<Snapshot>, Arc<Snapshot>> {
        let source = source.into();
        let deck = deck::parse_with(&source, &self.renderer);
        let mut current = self.current.write().unwrap_or_else(|e| e.into_inner());
        if current.version != expected {
            return Err(current.clone());
        }
        let next = Arc::new(Snapshot {
            version: expected + 1,
            source,
            deck,
        });
        *current = next.clone();
        Ok(next)
    }
}
