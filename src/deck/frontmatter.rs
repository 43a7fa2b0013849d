use std::collections::BTreeMap;

/// Delimiter that opens and closes the header block.
pub const DELIMITER: &str = "---";

/// Flat key/value header found at the top of a document.
pub type Frontmatter = BTreeMap<String, String>;

/// Split a raw document into its frontmatter and trimmed body.
///
/// The delimiter is only used as a block boundary: the text is cut on its
/// first two occurrences, everything after the second belongs to the body.
/// Header lines without a `:` are skipped and later keys overwrite earlier
/// ones. A document without a complete header block comes back unchanged
/// (trimmed) with an empty map.
pub fn parse(raw: &str) -> (Frontmatter, &str) {
    let mut fm = Frontmatter::new();
    let body = raw.trim();
    if !body.starts_with(DELIMITER) {
        return (fm, body);
    }

    let parts: Vec<&str> = body.splitn(3, DELIMITER).collect();
    if parts.len() < 3 {
        return (fm, body);
    }

    for line in parts[1].trim().lines() {
        if let Some((key, value)) = line.split_once(':') {
            fm.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    (fm, parts[2].trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_header() {
        let (fm, body) = parse("---\ntitle: X\n---\nBody");
        assert_eq!(fm.len(), 1);
        assert_eq!(fm.get("title").map(String::as_str), Some("X"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn no_header_returns_trimmed_input() {
        let (fm, body) = parse("\n\n  # Hello\n\nworld  \n");
        assert!(fm.is_empty());
        assert_eq!(body, "# Hello\n\nworld");
    }

    #[test]
    fn unterminated_header_is_body() {
        let (fm, body) = parse("---\ntitle: X\nno closing");
        assert!(fm.is_empty());
        assert_eq!(body, "---\ntitle: X\nno closing");
    }

    #[test]
    fn value_keeps_later_colons() {
        let (fm, _) = parse("---\nurl: http://example.com:8080\n---\n");
        assert_eq!(fm["url"], "http://example.com:8080");
    }

    #[test]
    fn last_duplicate_key_wins() {
        let (fm, _) = parse("---\nauthor: a\nauthor:  b \n---\nx");
        assert_eq!(fm["author"], "b");
    }

    #[test]
    fn lines_without_separator_are_ignored() {
        let (fm, body) = parse("---\njust text\n\nkey: v\n---\n\n# Slide");
        assert_eq!(fm.len(), 1);
        assert_eq!(fm["key"], "v");
        assert_eq!(body, "# Slide");
    }
}
