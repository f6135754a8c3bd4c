use std::time::Duration;

use crate::cli::Args;

pub const API_BASE: &str = "https://api.seranking.com";
pub const DEFAULT_SOURCE: &str = "il";
/// Per-request keyword limit of the export endpoint.
pub const VERIFY_BATCH_SIZE: usize = 50;
pub const DEFAULT_BATCH_DELAY: Duration = Duration::from_millis(500);

/// API credential. Never printed.
#[derive(Clone)]
pub struct ApiToken(String);

impl ApiToken {
    pub fn new(token: &str) -> Self {
        Self(token.trim().to_string())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// Everything a run needs, resolved once at startup and passed down explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_name: String,
    pub competitors: Vec<String>,
    pub base_url: String,
    /// Market/source code sent to both endpoints.
    pub source: String,
    /// Token for the domain (project) API.
    pub project_token: ApiToken,
    /// Token for the keyword data API.
    pub data_token: ApiToken,
    pub batch_size: usize,
    pub batch_delay: Duration,
}

impl Config {
    pub fn from_args(args: &Args) -> Self {
        Self {
            client_name: args.client.trim().to_string(),
            competitors: parse_competitors(&args.competitors),
            base_url: API_BASE.to_string(),
            source: args.source.trim().to_string(),
            project_token: ApiToken::new(&args.project_token),
            data_token: ApiToken::new(&args.data_token),
            batch_size: VERIFY_BATCH_SIZE,
            batch_delay: Duration::from_millis(args.batch_delay_ms),
        }
    }

    #[cfg(test)]
    pub(crate) fn for_tests(base_url: &str) -> Self {
        Self {
            client_name: "test".to_string(),
            competitors: Vec::new(),
            base_url: base_url.to_string(),
            source: DEFAULT_SOURCE.to_string(),
            project_token: ApiToken::new("project-token"),
            data_token: ApiToken::new("data-token"),
            batch_size: VERIFY_BATCH_SIZE,
            batch_delay: Duration::ZERO,
        }
    }
}

/// Split a comma-separated domain list, trimming entries and dropping empty ones.
pub fn parse_competitors(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(String::from)
        .collect()
}
