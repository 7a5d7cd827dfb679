//! Author-list formatting: initials, co-first asterisks, owner-anchored
//! truncation, owner highlighting.

use crate::config::SiteConfig;

/// How many formatted entries a list may have before truncation kicks in.
const MAX_FULL_LIST: usize = 8;

/// Tail entries that must remain visible for truncation to apply; the owner
/// sitting inside this tail means the list is left alone.
const TAIL_LEN: usize = 3;

/// Ellipsis marker inserted where consortium middles are elided.
const ELLIPSIS: &str = "...";

/// Shorten a full name to initials plus last name, appending `*` when the
/// last name is registered as co-first for this publication.
///
/// Names with a single whitespace-separated component pass through unchanged.
#[must_use]
pub fn format_author(name: &str, co_first: &[String]) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    if parts.len() < 2 {
        return name.to_string();
    }

    let last_name = parts[parts.len() - 1];
    let initials: Vec<String> = parts[..parts.len() - 1]
        .iter()
        .filter_map(|p| p.chars().next())
        .map(|c| format!("{c}."))
        .collect();

    let mut short = format!("{} {}", initials.join(" "), last_name);
    if co_first.iter().any(|c| c == last_name) {
        short.push('*');
    }
    short
}

/// Build the rendered author line for a publication.
///
/// Formats every name, then truncates consortium-length lists around the
/// owner's position: everything after the owner is replaced by an ellipsis
/// plus the original last two entries, so the owner and the paper's final
/// co-authors stay visible. Returns `None` when there are no authors.
#[must_use]
pub fn format_author_line(
    authors: &[String],
    doi: Option<&str>,
    site: &SiteConfig,
) -> Option<String> {
    if authors.is_empty() {
        return None;
    }

    let co_first = site.co_first_for(doi);
    let mut formatted: Vec<String> =
        authors.iter().map(|name| format_author(name, co_first)).collect();

    let owner_idx = formatted.iter().position(|f| site.owner_pattern.is_match(f));

    if let Some(idx) = owner_idx {
        if formatted.len() > MAX_FULL_LIST && idx < formatted.len() - TAIL_LEN {
            let tail: Vec<String> =
                formatted[formatted.len() - 2..].to_vec();
            formatted.truncate(idx + 1);
            formatted.push(ELLIPSIS.to_string());
            formatted.extend(tail);
        }
    }

    let joined = formatted.join(", ");
    Some(site.owner_highlight.replace_all(&joined, "<strong>$1</strong>").into_owned())
}
