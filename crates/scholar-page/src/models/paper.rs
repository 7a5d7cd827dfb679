//! Paper data model matching the Semantic Scholar API schema.

use serde::{Deserialize, Serialize};

/// A paper record as returned by the Graph API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Unique Semantic Scholar paper ID.
    #[serde(default)]
    pub paper_id: Option<String>,

    /// Paper title.
    #[serde(default)]
    pub title: Option<String>,

    /// Publication year.
    #[serde(default)]
    pub year: Option<i32>,

    /// Publication venue (journal or conference).
    #[serde(default)]
    pub venue: Option<String>,

    /// External identifiers (DOI, ArXiv, etc.).
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,

    /// List of authors.
    #[serde(default)]
    pub authors: Vec<AuthorRef>,
}

impl Paper {
    /// Get the DOI if available.
    #[must_use]
    pub fn doi(&self) -> Option<&str> {
        self.external_ids.as_ref()?.doi.as_deref()
    }

    /// Author full names, in order, skipping entries without a name.
    #[must_use]
    pub fn author_names(&self) -> Vec<String> {
        self.authors.iter().filter_map(|a| a.name.clone()).collect()
    }
}

/// Author reference embedded in a paper record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRef {
    /// Author ID.
    #[serde(default)]
    pub author_id: Option<String>,

    /// Author display name.
    #[serde(default)]
    pub name: Option<String>,
}

/// External identifiers for a paper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalIds {
    /// Digital Object Identifier.
    #[serde(rename = "DOI", default)]
    pub doi: Option<String>,

    /// ArXiv preprint ID.
    #[serde(rename = "ArXiv", default)]
    pub arxiv: Option<String>,

    /// PubMed ID.
    #[serde(rename = "PubMed", default)]
    pub pubmed: Option<String>,

    /// Semantic Scholar Corpus ID.
    #[serde(rename = "CorpusId", default)]
    pub corpus_id: Option<i64>,
}

/// One page of an author's papers (`/author/{id}/papers` response).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorPapersPage {
    /// Current offset in the result set.
    #[serde(default)]
    pub offset: i32,

    /// Next offset if more results are available.
    #[serde(default)]
    pub next: Option<i32>,

    /// Papers in this page.
    #[serde(default)]
    pub data: Vec<Paper>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paper_deserialize_minimal() {
        let json = r#"{"paperId": "abc123"}"#;
        let paper: Paper = serde_json::from_str(json).unwrap();
        assert_eq!(paper.paper_id.as_deref(), Some("abc123"));
        assert!(paper.title.is_none());
        assert!(paper.authors.is_empty());
        assert!(paper.doi().is_none());
    }

    #[test]
    fn test_paper_deserialize_full() {
        let json = r#"{
            "paperId": "abc123",
            "title": "Test Paper",
            "year": 2024,
            "venue": "Nature",
            "authors": [{"authorId": "auth1", "name": "Jane Doe"}, {"authorId": null}],
            "externalIds": {"DOI": "10.1234/test", "CorpusId": 42}
        }"#;

        let paper: Paper = serde_json::from_str(json).unwrap();
        assert_eq!(paper.year, Some(2024));
        assert_eq!(paper.doi(), Some("10.1234/test"));
        // Unnamed authors are dropped from the name list.
        assert_eq!(paper.author_names(), vec!["Jane Doe".to_string()]);
    }

    #[test]
    fn test_author_papers_page() {
        let json = r#"{"offset": 0, "next": 50, "data": [{"paperId": "p1"}]}"#;
        let page: AuthorPapersPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.next, Some(50));
        assert_eq!(page.data.len(), 1);
    }
}
