//! Markdown document to slide deck.
//!
//! A document is an optional frontmatter block followed by slides separated
//! by `---` lines. Each slide may carry one `<!-- notes: ... -->` annotation.

pub mod frontmatter;
pub mod notes;
pub mod render;
pub mod split;

use serde::Serialize;

pub use frontmatter::Frontmatter;
pub use render::MarkdownRenderer;

/// Presentation shown when no deck has been loaded.
pub const DEMO_MARKDOWN: &str = include_str!("demo.md");

/// One rendered slide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slide {
    /// Position of the fragment in the raw split, blank fragments included.
    pub index: usize,
    pub markdown: String,
    pub html: String,
    pub notes: String,
}

/// A fully parsed presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Deck {
    pub frontmatter: Frontmatter,
    pub slides: Vec<Slide>,
    pub total: usize,
}

impl Deck {
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn title(&self) -> Option<&str> {
        self.frontmatter.get("title").map(String::as_str)
    }
}

/// Parse a document with the default renderer.
pub fn parse(raw: &str) -> Deck {
    parse_with(raw, &MarkdownRenderer::default())
}

/// Parse a document into a deck. Never fails: a blank document yields no
/// slides and a document without separators yields a single slide.
///
/// Skipped blank fragments still consume an index, so indices may have gaps.
pub fn parse_with(raw: &str, renderer: &MarkdownRenderer) -> Deck {
    let (frontmatter, body) = frontmatter::parse(raw);

    let slides: Vec<Slide> = split::fragments(body)
        .into_iter()
        .enumerate()
        .filter_map(|(index, fragment)| {
            let fragment = fragment.trim();
            if fragment.is_empty() {
                return None;
            }
            let (markdown, notes) = notes::extract(fragment);
            let html = renderer.render(&markdown);
            Some(Slide {
                index,
                markdown,
                html,
                notes,
            })
        })
        .collect();

    Deck {
        frontmatter,
        total: slides.len(),
        slides,
    }
}
