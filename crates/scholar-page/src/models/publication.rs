//! Normalized publication record.

use serde::Serialize;

use super::Paper;
use crate::config::preprint;

/// A normalized publication, built once from a raw [`Paper`] and not mutated
/// afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Publication {
    /// Title, defaulted to "Untitled" when the record carries none.
    pub title: String,

    /// Publication year; `None` sorts below every real year.
    pub year: Option<i32>,

    /// Venue name, defaulted to "Preprint" when absent.
    pub venue: String,

    /// DOI, when the record has one.
    pub doi: Option<String>,

    /// Whether the record lives on a preprint server.
    pub is_preprint: bool,

    /// Author full names in the order the source lists them.
    pub authors: Vec<String>,
}

impl Publication {
    /// Normalize a raw paper record. Pure and total: missing optional fields
    /// default silently, nothing errors.
    #[must_use]
    pub fn from_paper(paper: &Paper) -> Self {
        let doi = paper.doi().map(str::to_string);
        let venue = paper
            .venue
            .as_deref()
            .filter(|v| !v.is_empty())
            .unwrap_or("Preprint")
            .to_string();

        let is_preprint = doi.as_deref().is_some_and(|d| d.starts_with(preprint::DOI_PREFIX))
            || venue.to_lowercase().contains(preprint::VENUE_MARKER);

        Self {
            title: paper
                .title
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or("Untitled")
                .to_string(),
            year: paper.year,
            venue,
            doi,
            is_preprint,
            authors: paper.author_names(),
        }
    }

    /// Canonical link target for the DOI, when one exists.
    #[must_use]
    pub fn doi_url(&self) -> Option<String> {
        self.doi.as_deref().map(|d| format!("https://doi.org/{d}"))
    }

    /// Year used for sorting; missing years sort as zero.
    #[must_use]
    pub fn sort_year(&self) -> i32 {
        self.year.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuthorRef, ExternalIds};

    fn paper(title: Option<&str>, venue: Option<&str>, doi: Option<&str>) -> Paper {
        Paper {
            paper_id: Some("p".to_string()),
            title: title.map(str::to_string),
            year: Some(2024),
            venue: venue.map(str::to_string),
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
    fn test_defaults_for_missing_fields() {
        let p = Publication::from_paper(&Paper::default());
        assert_eq!(p.title, "Untitled");
        assert_eq!(p.venue, "Preprint");
        assert!(p.doi.is_none());
        assert!(p.authors.is_empty());
        assert_eq!(p.sort_year(), 0);
    }

    #[test]
    fn test_preprint_by_doi_prefix() {
        let p = Publication::from_paper(&paper(
            Some("A preprint"),
            Some("bioRxiv"),
            Some("10.1101/2025.01.01.000001"),
        ));
        assert!(p.is_preprint);
    }

    #[test]
    fn test_preprint_by_venue_substring() {
        let p = Publication::from_paper(&paper(Some("A preprint"), Some("BioRxiv"), None));
        assert!(p.is_preprint);
    }

    #[test]
    fn test_published_record_is_not_preprint() {
        let p = Publication::from_paper(&paper(Some("An article"), Some("Nature"), Some("10.1038/xyz")));
        assert!(!p.is_preprint);
        assert_eq!(p.doi_url().as_deref(), Some("https://doi.org/10.1038/xyz"));
    }

    #[test]
    fn test_empty_venue_defaults_and_classifies() {
        // An empty venue string defaults to "Preprint", but the default alone
        // does not mark the record as a preprint.
        let p = Publication::from_paper(&paper(Some("T"), Some(""), None));
        assert_eq!(p.venue, "Preprint");
        assert!(!p.is_preprint);
    }
}
