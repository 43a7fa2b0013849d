//! Markdown to HTML conversion for a single slide.
//!
//! Tables and strikethrough are enabled, single newlines inside a paragraph
//! become `<br />`, and every code block is syntax highlighted with inline
//! styles. Highlighting never fails the render: anything syntect cannot
//! handle falls back to an escaped `<pre><code>` block.

use std::sync::LazyLock;

use pulldown_cmark::escape::escape_html;
use pulldown_cmark::{CodeBlockKind, CowStr, Event, Options, Parser, Tag, html};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::{SyntaxReference, SyntaxSet};

/// Theme used when none is configured or the configured one is unknown.
pub const DEFAULT_THEME: &str = "base16-ocean.dark";

/// CSS class on the wrapper around every code block.
pub const CODE_CLASS: &str = "codehilite";

static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEMES: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Extensions the renderer enables. Shared with the slide splitter so both
/// agree on where code blocks are.
pub fn markdown_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options
}

/// Stateless Markdown renderer. The only configuration is the code theme.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownRenderer {
    theme: String,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

impl MarkdownRenderer {
    /// Build a renderer for the named theme, falling back to the default
    /// theme if the name is not bundled.
    pub fn new(theme: &str) -> Self {
        if THEMES.themes.contains_key(theme) {
            return Self {
                theme: theme.to_string(),
            };
        }
        log::warn!("Unknown code theme '{theme}', using '{DEFAULT_THEME}'");
        Self::default()
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Render a Markdown fragment to HTML.
    pub fn render(&self, markdown: &str) -> String {
        let options = markdown_options();
        let mut events: Vec<Event> = Vec::new();
        let mut code: Option<(Option<String>, String)> = None;

        for event in Parser::new_ext(markdown, options) {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(info) => language_token(&info),
                        CodeBlockKind::Indented => None,
                    };
                    code = Some((lang, String::new()));
                }
                Event::End(Tag::CodeBlock(_)) => {
                    if let Some((lang, text)) = code.take() {
                        let block = self.highlight(&text, lang.as_deref());
                        events.push(Event::Html(CowStr::from(block)));
                    }
                }
                Event::Text(text) if code.is_some() => {
                    if let Some((_, buf)) = code.as_mut() {
                        buf.push_str(&text);
                    }
                }
                Event::SoftBreak => events.push(Event::HardBreak),
                other => events.push(other),
            }
        }

        let mut out = String::with_capacity(markdown.len() * 2);
        html::push_html(&mut out, events.into_iter());
        out
    }

    /// Highlight one code block, guessing the language when none is given.
    fn highlight(&self, code: &str, lang: Option<&str>) -> String {
        let Some(theme) = THEMES.themes.get(&self.theme) else {
            return plain_code_block(code, lang);
        };
        let syntax = resolve_syntax(code, lang);
        match highlighted_html_for_string(code, &SYNTAXES, syntax, theme) {
            Ok(highlighted) => format!("<div class=\"{CODE_CLASS}\">{highlighted}</div>\n"),
            Err(e) => {
                log::debug!("Highlighting failed for {}: {e}", syntax.name);
                plain_code_block(code, lang)
            }
        }
    }
}

/// First word of a fence info string, e.g. `python` from "```python title=x".
fn language_token(info: &str) -> Option<String> {
    info.split_whitespace()
        .next()
        .map(|t| t.trim_matches(|c| c == '{' || c == '}' || c == '.'))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

// Distinctive fragments for untagged blocks, checked in order. The first
// marker found picks the syntax by token.
const CONTENT_MARKERS: &[(&str, &str)] = &[
    ("<?php", "php"),
    ("#include <", "c"),
    ("fn main(", "rust"),
    ("let mut ", "rust"),
    ("impl ", "rust"),
    ("package main", "go"),
    ("func ", "go"),
    ("public class ", "java"),
    ("def ", "python"),
    ("import ", "python"),
    ("<!DOCTYPE html", "html"),
    ("<html", "html"),
    ("function ", "js"),
    ("=> {", "js"),
    ("SELECT ", "sql"),
    ("CREATE TABLE", "sql"),
    ("$ ", "sh"),
    ("echo ", "sh"),
];

/// Best-effort language guess from a block's contents.
fn guess_language(code: &str) -> Option<&'static SyntaxReference> {
    CONTENT_MARKERS
        .iter()
        .find(|(marker, _)| code.contains(marker))
        .and_then(|(_, token)| SYNTAXES.find_syntax_by_token(token))
}

/// Tag name or extension first, then shebang/modeline detection, then
/// content markers, then plain text.
fn resolve_syntax(code: &str, lang: Option<&str>) -> &'static SyntaxReference {
    lang.and_then(|l| SYNTAXES.find_syntax_by_token(l))
        .or_else(|| SYNTAXES.find_syntax_by_first_line(code))
        .or_else(|| guess_language(code))
        .unwrap_or_else(|| SYNTAXES.find_syntax_plain_text())
}

/// Unhighlighted, escaped code block.
pub fn plain_code_block(code: &str, lang: Option<&str>) -> String {
    let mut out = format!("<div class=\"{CODE_CLASS}\"><pre><code");
    if let Some(lang) = lang {
        out.push_str(" class=\"language-");
        let _ = escape_html(&mut out, lang);
        out.push('"');
    }
    out.push('>');
    let _ = escape_html(&mut out, code);
    out.push_str("</code></pre></div>\n");
    out
}

/// Render with the default renderer.
pub fn render_markdown(markdown: &str) -> String {
    static DEFAULT: LazyLock<MarkdownRenderer> = LazyLock::new(MarkdownRenderer::default);
    DEFAULT.render(markdown)
}
