use std::ops::Range;

use pulldown_cmark::{Event, Parser, Tag};

use super::render::markdown_options;

/// Line that separates two slides.
pub const SEPARATOR: &str = "---";

/// Byte ranges of every code block in `body`, as the renderer sees them.
fn code_block_ranges(body: &str) -> Vec<Range<usize>> {
    Parser::new_ext(body, markdown_options())
        .into_offset_iter()
        .filter_map(|(event, range)| match event {
            Event::Start(Tag::CodeBlock(_)) => Some(range),
            _ => None,
        })
        .collect()
}

/// Split a document body into raw slide fragments.
///
/// A fragment boundary is a line that is exactly `---`, has a line break on
/// both sides, sits outside any code block and does not directly follow
/// another boundary. Fragments are returned untrimmed and in order, blank
/// ones included, so a fragment's position is its raw split index.
pub fn fragments(body: &str) -> Vec<&str> {
    let code = code_block_ranges(body);
    let in_code = |offset: usize| code.iter().any(|r| r.contains(&offset));

    let lines: Vec<&str> = body.split('\n').collect();
    let last = lines.len().saturating_sub(1);

    let mut out = Vec::new();
    let mut start = 0usize; // byte offset of the current fragment
    let mut offset = 0usize; // byte offset of the current line
    let mut prev_separator = false;

    for (i, line) in lines.iter().enumerate() {
        let line_start = offset;
        offset += line.len() + 1;

        let is_separator = *line == SEPARATOR
            && i > 0
            && i < last
            && !prev_separator
            && !in_code(line_start);

        if is_separator {
            // Fragment ends before the newline that precedes the separator.
            out.push(&body[start..line_start - 1]);
            start = offset;
        }
        prev_separator = is_separator;
    }

    out.push(&body[start.min(body.len())..]);
    out
}
