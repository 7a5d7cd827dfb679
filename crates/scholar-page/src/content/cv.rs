//! Parser for `cv.md`.
//!
//! `## ` headings open sections; within a section, entries are separated by
//! blank lines. Entry lines are: date range (`--` becomes an en-dash), title,
//! optional location, optional detail. Entries with fewer than two lines are
//! skipped.

use std::sync::LazyLock;

use regex::Regex;

use super::inline::format_inline;

static SECTION_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^## ").expect("valid section pattern"));

static ENTRY_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid entry pattern"));

/// Render the CV document to its HTML fragment.
#[must_use]
pub fn render(text: &str) -> String {
    let mut html = String::new();

    for section in SECTION_SPLIT.split(text.trim()) {
        let section = section.trim();
        if section.is_empty() {
            continue;
        }

        let (title, body) = section.split_once('\n').unwrap_or((section, ""));
        html.push_str("<div class=\"cv-section\">");
        html.push_str(&format!("<h3>{}</h3>", title.trim()));

        for entry in ENTRY_SPLIT.split(body.trim()) {
            let lines: Vec<&str> =
                entry.trim().lines().map(str::trim).filter(|l| !l.is_empty()).collect();
            if lines.len() < 2 {
                continue;
            }

            let date = lines[0].replace("--", "\u{2013}");
            html.push_str("<div class=\"cv-item\">");
            html.push_str(&format!("<span class=\"cv-date\">{date}</span>"));
            html.push_str("<div class=\"cv-content\">");
            html.push_str(&format!("<strong>{}</strong>", format_inline(lines[1])));
            if let Some(location) = lines.get(2) {
                html.push_str(&format!("<p>{}</p>", format_inline(location)));
            }
            if let Some(detail) = lines.get(3) {
                html.push_str(&format!("<p class=\"cv-detail\">{}</p>", format_inline(detail)));
            }
            html.push_str("</div></div>");
        }

        html.push_str("</div>");
    }

    html
}
