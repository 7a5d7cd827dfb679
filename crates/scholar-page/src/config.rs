//! Configuration for the homepage generator.
//!
//! Two layers: [`Config`] holds the HTTP client settings, [`SiteConfig`] holds
//! the site-owner identity and co-first-author registry that the rendering
//! pipeline needs. Both are plain data passed in explicitly so the pipeline
//! carries no hidden global state.

use std::collections::HashMap;
use std::time::Duration;

use regex::Regex;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Graph API endpoint.
    pub const GRAPH_API: &str = "https://api.semanticscholar.org/graph/v1";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Fields requested for each paper record.
    pub const PAPER_FIELDS: &[&str] = &["title", "year", "venue", "externalIds", "authors"];

    /// Maximum number of papers requested per author.
    pub const PAPER_LIMIT: i32 = 50;
}

/// Preprint classification constants.
pub mod preprint {
    /// DOI namespace prefix for bioRxiv/medRxiv preprints.
    pub const DOI_PREFIX: &str = "10.1101/";

    /// Venue-name substring identifying a preprint server (matched case-insensitively).
    pub const VENUE_MARKER: &str = "biorxiv";
}

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for the Graph API (overridable for mock servers).
    pub graph_api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create the default production configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph_api_url: api::GRAPH_API.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration pointed at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            graph_api_url: format!("{}/graph/v1", base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Site-owner configuration injected into the publication pipeline.
///
/// The owner patterns tolerate the "ä"/"ae"/"a" spelling variants of the
/// owner's surname, since upstream metadata is inconsistent about umlauts.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Semantic Scholar author ID whose papers are listed.
    pub author_id: String,

    /// DOI -> last names of co-first authors on that paper.
    pub co_first: HashMap<String, Vec<String>>,

    /// Matches the owner's surname within a formatted author name.
    pub owner_pattern: Regex,

    /// Matches the owner's full formatted short name (with optional
    /// co-first asterisk) for `<strong>` highlighting.
    pub owner_highlight: Regex,
}

impl SiteConfig {
    /// Configuration for the live site.
    #[must_use]
    pub fn site_default() -> Self {
        let co_first = HashMap::from([(
            "10.1101/2025.03.14.643363".to_string(),
            vec!["Boulanger-Weill".to_string(), "K\u{e4}mpf".to_string()],
        )]);

        Self {
            author_id: "2350578684".to_string(),
            co_first,
            owner_pattern: Regex::new(r"(?i)K(?:\u{e4}|ae?)mpf").expect("valid owner pattern"),
            owner_highlight: Regex::new(r"(?i)(F\.\s*(?:F\.\s*)?K(?:\u{e4}|ae?)mpf\*?)")
                .expect("valid highlight pattern"),
        }
    }

    /// Co-first author last names registered for a DOI, if any.
    #[must_use]
    pub fn co_first_for(&self, doi: Option<&str>) -> &[String] {
        doi.and_then(|d| self.co_first.get(d)).map_or(&[], Vec::as_slice)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::site_default()
    }
}
