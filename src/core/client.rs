use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{debug, info};

use crate::error::RequestError;
use crate::models::{PuzzleOptions, ServiceConfig};

/// Path of the generation endpoint, relative to the service base URL
pub const GENERATE_PATH: &str = "/api/generate";

/// User-Agent string for HTTP requests
pub const USER_AGENT: &str = concat!("calcrostic/", env!("CARGO_PKG_VERSION"));

/// Puzzle service API client
pub struct PuzzleClient {
    client: Client,
    config: ServiceConfig,
}

impl PuzzleClient {
    /// Create a new client with the given configuration
    pub fn new(config: ServiceConfig) -> Result<Self, RequestError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if config.timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_seconds));
        }
        let client = builder
            .build()
            .map_err(|e| RequestError::Failed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Full request URL for the given options
    pub fn generate_url(&self, options: &PuzzleOptions) -> Result<Url, RequestError> {
        let base = self.config.url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{}{}", base, GENERATE_PATH))
            .map_err(|e| RequestError::InvalidUrl(format!("{}: {}", self.config.url, e)))?;
        url.query_pairs_mut().extend_pairs(options.query_pairs());
        Ok(url)
    }

    /// Request a generated puzzle and return the raw response text.
    ///
    /// A non-success status is returned as [`RequestError::Http`] carrying the
    /// response body. There is no retry.
    pub async fn fetch_puzzle(&self, options: &PuzzleOptions) -> Result<String, RequestError> {
        let url = self.generate_url(options)?;
        debug!("Requesting puzzle: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    RequestError::Connection(format!(
                        "Could not connect to puzzle service at {}. Is it running?",
                        self.config.url
                    ))
                } else if e.is_timeout() {
                    RequestError::Timeout(self.config.timeout_seconds)
                } else {
                    RequestError::from(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RequestError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        let text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                RequestError::Timeout(self.config.timeout_seconds)
            } else {
                RequestError::Failed(format!("Failed to read response body: {}", e))
            }
        })?;

        info!("Received {} characters from puzzle service", text.len());
        Ok(text)
    }
}
