pub mod types;

use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

use crate::config::{ApiToken, Config};
use types::{ExportRequest, KeywordMetrics, decode_items};

/// Errors returned by SE Ranking API calls.
#[derive(Debug, thiserror::Error)]
pub enum SeRankingError {
    #[error("SE Ranking API error ({code}): {body}")]
    Status { code: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Remote keyword data used by the pipeline.
/// Implemented by `SeRankingClient` for production; mock implementations used in tests.
pub trait KeywordSource {
    /// Organic keywords a domain ranks for.
    async fn domain_keywords(&self, domain: &str) -> Result<Vec<KeywordMetrics>, SeRankingError>;

    /// Metrics for one batch of candidate keywords.
    async fn export_keywords(
        &self,
        keywords: &[String],
    ) -> Result<Vec<KeywordMetrics>, SeRankingError>;
}

/// HTTP client for the SE Ranking domain and keyword data APIs.
///
/// The two endpoints belong to different services and authenticate with separate tokens.
#[derive(Clone)]
pub struct SeRankingClient {
    http: Client,
    base_url: String,
    source: String,
    project_token: ApiToken,
    data_token: ApiToken,
}

impl SeRankingClient {
    pub fn new(http: Client, config: &Config) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            source: config.source.clone(),
            project_token: config.project_token.clone(),
            data_token: config.data_token.clone(),
        }
    }

    fn url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, SeRankingError> {
        Ok(Url::parse_with_params(
            &format!("{}{path}", self.base_url),
            params,
        )?)
    }

    async fn read_items(
        response: reqwest::Response,
        expected: StatusCode,
    ) -> Result<Vec<KeywordMetrics>, SeRankingError> {
        let status = response.status();
        let text = response.text().await?;
        if status != expected {
            return Err(SeRankingError::Status {
                code: status.as_u16(),
                body: text.chars().take(200).collect(),
            });
        }
        Ok(decode_items(&text)?)
    }
}

impl KeywordSource for SeRankingClient {
    async fn domain_keywords(&self, domain: &str) -> Result<Vec<KeywordMetrics>, SeRankingError> {
        let url = self.url(
            "/v1/domain/keywords",
            &[
                ("source", self.source.as_str()),
                ("domain", domain),
                ("type", "organic"),
            ],
        )?;

        let response = self
            .http
            .get(url)
            .header("Authorization", format!("Token {}", self.project_token.expose()))
            .header("User-Agent", crate::USER_AGENT)
            .send()
            .await?;

        let items = Self::read_items(response, StatusCode::OK).await?;
        debug!(domain, items = items.len(), "domain keywords fetched");
        Ok(items)
    }

    async fn export_keywords(
        &self,
        keywords: &[String],
    ) -> Result<Vec<KeywordMetrics>, SeRankingError> {
        let url = self.url("/v1/keywords/export", &[("source", self.source.as_str())])?;

        let response = self
            .http
            .post(url)
            .header("Authorization", format!("Token {}", self.data_token.expose()))
            .header("User-Agent", crate::USER_AGENT)
            .json(&ExportRequest { keywords })
            .send()
            .await?;

        // The export endpoint answers 201 Created on success, not 200.
        let items = Self::read_items(response, StatusCode::CREATED).await?;
        debug!(requested = keywords.len(), returned = items.len(), "keyword batch exported");
        Ok(items)
    }
}
