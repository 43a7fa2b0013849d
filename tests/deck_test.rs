//! Integration tests for Markdown to deck parsing.

use slides_web::deck::{self, DEMO_MARKDOWN, notes, render};

mod common;
use common::TWO_SLIDES;

#[test]
fn test_two_slide_scenario() {
    let deck = deck::parse(TWO_SLIDES);
    assert_eq!(deck.total, 2);
    assert_eq!(deck.slides.len(), deck.total);
    assert_eq!(deck.slides[0].markdown, "# S1");
    assert_eq!(deck.slides[1].markdown, "# S2");
    assert_eq!(deck.slides[0].notes, "");
    assert_eq!(deck.slides[1].notes, "");
    assert!(deck.frontmatter.is_empty());
}

#[test]
fn test_frontmatter_round_trip() {
    let deck = deck::parse("---\ntitle: X\n---\nBody");
    assert_eq!(deck.frontmatter.len(), 1);
    assert_eq!(deck.frontmatter["title"], "X");
    assert_eq!(deck.total, 1);
    assert_eq!(deck.slides[0].markdown, "Body");
}

#[test]
fn test_notes_round_trip() {
    let (cleaned, notes) = notes::extract("A\n<!-- notes: hello -->\nB");
    assert_eq!(cleaned, "A\n\nB");
    assert_eq!(notes, "hello");

    let (again, more) = notes::extract(&cleaned);
    assert_eq!(again, cleaned);
    assert_eq!(more, "");
}

#[test]
fn test_blank_documents_have_no_slides() {
    for raw in ["", " ", "\n\n", "\t \n \r\n"] {
        let deck = deck::parse(raw);
        assert!(deck.slides.is_empty(), "{raw:?}");
        assert_eq!(deck.total, 0);
    }
}

#[test]
fn test_blank_fragments_are_skipped() {
    let deck = deck::parse("x\n---\n\n---\n\n---\ny");
    assert_eq!(deck.total, 2);
    assert_eq!(deck.slides[1].markdown, "y");

    // A leading pair of separators reads as an empty frontmatter block.
    let deck = deck::parse("\n---\n \n---\n");
    assert_eq!(deck.total, 0);
    assert!(deck.frontmatter.is_empty());
}

#[test]
fn test_fenced_code_with_separator_is_one_slide() {
    let raw = "# Config\n\n```yaml\nfirst: 1\n---\nsecond: 2\n```";
    let deck = deck::parse(raw);
    assert_eq!(deck.total, 1);
    assert!(deck.slides[0].markdown.contains("---\nsecond: 2"));
    assert!(deck.slides[0].html.contains("codehilite"));
}

#[test]
fn test_separator_after_fence_still_splits() {
    let raw = "```\n---\n```\n---\n# Next";
    let deck = deck::parse(raw);
    assert_eq!(deck.total, 2);
    assert_eq!(deck.slides[1].markdown, "# Next");
}

#[test]
fn test_index_keeps_raw_split_positions() {
    let deck = deck::parse("# A\n---\n   \n---\n# B\n---\n\n---\n# C");
    let indices: Vec<usize> = deck.slides.iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![0, 2, 4]);
    assert_eq!(deck.total, 3);
}

#[test]
fn test_indices_are_non_decreasing() {
    let inputs = [
        DEMO_MARKDOWN,
        "a\n---\nb\n---\n---\nc",
        "---\nk: v\n---\n---\n# x\n---\n",
        "```\n---\n",
        "<!-- notes: only notes -->",
    ];
    for raw in inputs {
        let deck = deck::parse(raw);
        assert_eq!(deck.total, deck.slides.len());
        assert!(deck.slides.windows(2).all(|w| w[0].index < w[1].index), "{raw:?}");
    }
}

#[test]
fn test_notes_only_slide_keeps_empty_markdown() {
    let deck = deck::parse("<!-- notes: only notes -->");
    assert_eq!(deck.total, 1);
    assert_eq!(deck.slides[0].markdown, "");
    assert_eq!(deck.slides[0].notes, "only notes");
}

#[test]
fn test_second_notes_annotation_left_in_markdown() {
    let deck = deck::parse("# T\n<!-- notes: one -->\n<!-- notes: two -->");
    let slide = &deck.slides[0];
    assert_eq!(slide.notes, "one");
    assert_eq!(slide.markdown, "# T\n\n<!-- notes: two -->");
}

#[test]
fn test_html_is_pure_function_of_markdown() {
    let deck = deck::parse(DEMO_MARKDOWN);
    for slide in &deck.slides {
        assert_eq!(slide.html, render::render_markdown(&slide.markdown));
    }
    assert_eq!(deck, deck::parse(DEMO_MARKDOWN));
}

#[test]
fn test_horizontal_rule_mid_paragraph_does_not_split() {
    let deck = deck::parse("line one\n --- \nline two\n---- \nend");
    assert_eq!(deck.total, 1);
}

#[test]
fn test_deck_json_shape() {
    let deck = deck::parse("---\na: b\n---\n# A\n<!-- notes: n -->");
    let value = serde_json::to_value(&deck).unwrap();
    let obj = value.as_object().unwrap();
    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, vec!["frontmatter", "slides", "total"]);

    let slide = value["slides"][0].as_object().unwrap();
    let mut slide_keys: Vec<&str> = slide.keys().map(String::as_str).collect();
    slide_keys.sort();
    assert_eq!(slide_keys, vec!["html", "index", "markdown", "notes"]);
    assert_eq!(value["slides"][0]["notes"], "n");
    assert_eq!(value["frontmatter"]["a"], "b");
}

#[test]
fn test_backticks_inside_notes_do_not_swallow_separators() {
    let deck = deck::parse("# A\n<!-- notes:\n```\nsay this\n-->\n---\n# B\n---\n# C");
    assert_eq!(deck.total, 3);
    assert_eq!(deck.slides[0].markdown, "# A");
    assert_eq!(deck.slides[0].notes, "```\nsay this");
    assert_eq!(deck.slides[2].markdown, "# C");
}

#[test]
fn test_backticks_inside_html_block_do_not_swallow_separators() {
    let deck = deck::parse("<div>\n```\n</div>\n\n---\n# B");
    assert_eq!(deck.total, 2);
    assert_eq!(deck.slides[1].markdown, "# B");
}
