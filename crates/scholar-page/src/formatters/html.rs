//! HTML rendering for the publications list.
//!
//! Pure string assembly over reconciled [`Publication`]s. Text is emitted
//! unescaped, matching the site's existing markup: titles come from the API
//! and everything else is owner-authored.

use crate::config::SiteConfig;
use crate::models::Publication;
use crate::pipeline::authors::format_author_line;

/// Markup shown when the source returns zero records.
pub const NO_PUBLICATIONS: &str = "<p>No publications found.</p>";

/// Markup shown when the fetch fails.
pub const LOAD_FAILED: &str = "<p>Unable to load publications. Please try again later.</p>";

/// Render the full publications fragment.
#[must_use]
pub fn render_publications(pubs: &[Publication], site: &SiteConfig) -> String {
    let mut output = String::new();
    for publication in pubs {
        output.push_str(&render_publication(publication, site));
    }
    output
}

/// Render one publication as an `<article>` block.
#[must_use]
pub fn render_publication(publication: &Publication, site: &SiteConfig) -> String {
    let link = publication.doi_url();

    let mut output = String::from("<article class=\"publication\">");

    match &link {
        Some(url) => output.push_str(&format!(
            "<h3 class=\"pub-title\"><a href=\"{url}\" target=\"_blank\" rel=\"noopener\">{}</a></h3>",
            publication.title
        )),
        None => {
            output.push_str(&format!("<h3 class=\"pub-title\">{}</h3>", publication.title));
        }
    }

    if let Some(authors) =
        format_author_line(&publication.authors, publication.doi.as_deref(), site)
    {
        output.push_str(&format!("<p class=\"pub-authors\">{authors}</p>"));
    }

    match publication.year {
        Some(year) => output.push_str(&format!(
            "<p class=\"pub-journal\">{}, {year}</p>",
            publication.venue
        )),
        None => output.push_str(&format!("<p class=\"pub-journal\">{}</p>", publication.venue)),
    }

    if let Some(url) = &link {
        output.push_str(&format!(
            "<div class=\"pub-links\"><a href=\"{url}\" class=\"pub-link\" target=\"_blank\" rel=\"noopener\">Paper</a></div>"
        ));
    }

    output.push_str("</article>");
    output
}
