//! Semantic Scholar API client.
//!
//! One request per page build: the author-papers listing. No retries and no
//! caching; a failed fetch surfaces as a [`ClientError`] that the pipeline
//! turns into fallback markup.

use reqwest::Client;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{AuthorPapersPage, Paper};

/// HTTP client for the Graph API.
#[derive(Debug, Clone)]
pub struct ScholarClient {
    client: Client,
    graph_api_url: String,
}

impl ScholarClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            "application/json".parse().expect("valid accept header"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self { client, graph_api_url: config.graph_api_url.clone() })
    }

    /// Fetch an author's papers with the fixed field set and result cap.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, or a
    /// malformed response body.
    pub async fn author_papers(&self, author_id: &str) -> ClientResult<Vec<Paper>> {
        let url = format!("{}/author/{}/papers", self.graph_api_url, author_id);

        let params = [
            ("fields".to_string(), api::PAPER_FIELDS.join(",")),
            ("limit".to_string(), api::PAPER_LIMIT.to_string()),
        ];

        let page: AuthorPapersPage = self.get(&url, &params).await?;
        Ok(page.data)
    }

    /// Make a GET request and decode the JSON body.
    async fn get<T>(&self, url: &str, params: &[(String, String)]) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.client.get(url).query(params).send().await?;
        let response = handle_response(response).await?;
        let value: serde_json::Value = response.json().await?;

        serde_json::from_value(value).map_err(ClientError::from)
    }
}

/// Map API response status codes to errors.
async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let code = status.as_u16();
    let text = response.text().await.unwrap_or_default();

    match code {
        404 => Err(ClientError::not_found(text)),
        400 => Err(ClientError::bad_request(text)),
        500..=599 => Err(ClientError::server(code, text)),
        _ => Err(ClientError::UnexpectedStatus { status: code, message: text }),
    }
}
