//! Parser for `talks.md`.
//!
//! Each block is four lines: type, title, venue, date. Blocks with fewer
//! than four non-blank lines are skipped.

use super::inline::format_inline;
use super::split_blocks;

/// Render the talks document to its HTML fragment.
#[must_use]
pub fn render(text: &str) -> String {
    let mut html = String::new();

    for block in split_blocks(text) {
        let lines: Vec<&str> =
            block.trim().lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if lines.len() < 4 {
            continue;
        }

        html.push_str(&format!(
            "<article class=\"talk\"><span class=\"talk-type\">{}</span><h3 class=\"talk-title\">{}</h3><p class=\"talk-venue\">{}</p><p class=\"talk-date\">{}</p></article>",
            lines[0],
            format_inline(lines[1]),
            format_inline(lines[2]),
            lines[3]
        ));
    }

    html
}
