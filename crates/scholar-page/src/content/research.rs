//! Parser for `research.md`.
//!
//! The first block is an intro paragraph. Each later block is a tag line,
//! an optional `# ` title line, and body text. When a block has no `# `
//! title, its tag doubles as the heading and no tag badge is emitted.

use super::inline::format_inline;
use super::split_blocks;

/// Render the research document to its HTML fragment.
#[must_use]
pub fn render(text: &str) -> String {
    let blocks = split_blocks(text);
    let mut html = String::new();

    if let Some(intro) = blocks.first() {
        html.push_str(&format!(
            "<p class=\"research-intro\">{}</p>",
            format_inline(intro.trim())
        ));
    }

    for block in blocks.iter().skip(1) {
        let mut lines = block.trim().lines().map(str::trim);
        let tag = lines.next().unwrap_or_default();

        let mut title = String::new();
        let mut body: Vec<&str> = Vec::new();
        for line in lines {
            if let Some(rest) = line.strip_prefix("# ") {
                title = rest.to_string();
            } else if !line.is_empty() {
                body.push(line);
            }
        }

        let body_html = format_inline(&body.join(" "));
        if title.is_empty() {
            html.push_str(&format!(
                "<div class=\"research-block\"><h3>{}</h3><p>{body_html}</p></div>",
                format_inline(tag)
            ));
        } else {
            html.push_str(&format!(
                "<div class=\"research-block\"><span class=\"research-tag\">{tag}</span><h3>{}</h3><p>{body_html}</p></div>",
                format_inline(&title)
            ));
        }
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "\
I study how *circuits* compute.\n\
\n\
---\n\
\n\
Current\n\
# Internal States in Drosophila\n\
First body line.\n\
Second body line.\n\
\n\
---\n\
\n\
Approach\n\
Untitled block body.";

    #[test]
    fn test_intro_paragraph() {
        let html = render(DOC);
        assert!(html.starts_with("<p class=\"research-intro\">I study how <em>circuits</em> compute.</p>"));
    }

    #[test]
    fn test_tagged_block_with_title() {
        let html = render(DOC);
        assert!(html.contains("<span class=\"research-tag\">Current</span>"));
        assert!(html.contains("<h3>Internal States in Drosophila</h3>"));
        assert!(html.contains("<p>First body line. Second body line.</p>"));
    }

    #[test]
    fn test_untitled_block_promotes_tag_to_heading() {
        let html = render(DOC);
        assert!(html.contains("<h3>Approach</h3>"));
        // No badge for the untitled block.
        assert_eq!(html.matches("research-tag").count(), 1);
    }
}
