//! Publication reconciliation pipeline.
//!
//! Fetch -> normalize -> dedup -> sort -> render. Each page build runs the
//! whole pipeline from scratch over the live API response; nothing is cached
//! between runs.

pub mod authors;
pub mod dedup;
pub mod matcher;

use tracing::{error, info};

use crate::client::ScholarClient;
use crate::config::SiteConfig;
use crate::formatters::html;
use crate::models::Publication;

/// Normalize raw records and reconcile them into the final display list.
#[must_use]
pub fn reconcile_papers(papers: &[crate::models::Paper]) -> Vec<Publication> {
    let normalized: Vec<Publication> = papers.iter().map(Publication::from_paper).collect();
    dedup::reconcile(normalized)
}

/// Build the publications HTML fragment for the site owner.
///
/// Failures are non-fatal: transport errors and empty result sets both
/// resolve to short fallback markup, with the underlying error reported via
/// tracing. No retries, no partial results.
pub async fn build_publications_html(client: &ScholarClient, site: &SiteConfig) -> String {
    match client.author_papers(&site.author_id).await {
        Ok(papers) if papers.is_empty() => {
            info!(author_id = %site.author_id, "no publications returned");
            html::NO_PUBLICATIONS.to_string()
        }
        Ok(papers) => {
            let publications = reconcile_papers(&papers);
            info!(
                fetched = papers.len(),
                rendered = publications.len(),
                "reconciled publication list"
            );
            html::render_publications(&publications, site)
        }
        Err(err) => {
            error!(error = %err, "failed to load publications");
            html::LOAD_FAILED.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuthorRef, ExternalIds, Paper};

    fn paper(title: &str, year: Option<i32>, venue: &str, doi: Option<&str>) -> Paper {
        Paper {
            paper_id: Some("p".to_string()),
            title: Some(title.to_string()),
            year,
            venue: Some(venue.to_string()),
            external_ids: doi.map(|d| ExternalIds {
                doi: Some(d.to_string()),
                ..ExternalIds::default()
            }),
            authors: vec![AuthorRef {
                author_id: None,
                name: Some("Jane Doe".to_string()),
            }],
        }
    }

    #[test]
    fn test_reconcile_end_to_end_dedup() {
        let papers = vec![
            paper(
                "Neural circuit mapping in larval zebrafish",
                Some(2025),
                "",
                Some("10.1101/2025.03.14.643363"),
            ),
            paper(
                "Neural circuit mapping in the larval zebrafish brain",
                Some(2025),
                "Nature Neuroscience",
                Some("10.1038/s41593"),
            ),
        ];

        let out = reconcile_papers(&papers);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].venue, "Nature Neuroscience");
    }

    #[test]
    fn test_reconcile_sorts_newest_first() {
        let papers = vec![
            paper("Old result", Some(2021), "Journal A", None),
            paper("New result", Some(2025), "Journal B", None),
            paper("Undated note", None, "Journal C", None),
        ];

        let out = reconcile_papers(&papers);
        let years: Vec<Option<i32>> = out.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![Some(2025), Some(2021), None]);
    }
}
