use std::sync::LazyLock;

use regex::Regex;

// `(?s)` lets the lazy body span lines; the shortest match wins.
static NOTES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--\s*notes:\s*(.*?)\s*-->").expect("notes pattern is valid")
});

/// Pull the first `<!-- notes: ... -->` annotation out of a slide fragment.
///
/// Returns the trimmed fragment with the annotation removed, and the trimmed
/// notes text. Only the first annotation is honored; later ones stay in the
/// markdown as ordinary HTML comments.
pub fn extract(fragment: &str) -> (String, String) {
    match NOTES_RE.captures(fragment) {
        Some(caps) => {
            let whole = caps.get(0).map(|m| m.range()).unwrap_or(0..0);
            let notes = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
            let mut cleaned = String::with_capacity(fragment.len());
            cleaned.push_str(&fragment[..whole.start]);
            cleaned.push_str(&fragment[whole.end..]);
            (cleaned.trim().to_string(), notes.to_string())
        }
        None => (fragment.trim().to_string(), String::new()),
    }
}
