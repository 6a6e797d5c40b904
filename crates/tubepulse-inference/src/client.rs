//! Summarization endpoint client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{InferenceError, InferenceResult};

/// Maximum tokens in a chunk summary.
const SUMMARY_MAX_LENGTH: u32 = 150;
/// Minimum tokens in a chunk summary.
const SUMMARY_MIN_LENGTH: u32 = 40;

/// Summarizer configuration.
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    /// Endpoint URL
    pub endpoint_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl SummarizerConfig {
    /// Create config from environment variables.
    pub fn from_env() -> InferenceResult<Self> {
        Ok(Self {
            endpoint_url: std::env::var("SUMMARIZER_ENDPOINT_URL")
                .map_err(|_| InferenceError::config_error("SUMMARIZER_ENDPOINT_URL not set"))?,
            timeout: Duration::from_secs(
                std::env::var("SUMMARIZER_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(60),
            ),
        })
    }
}

/// Summarization, as a trait seam for handler tests.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize one chunk of text.
    async fn summarize(&self, text: &str) -> InferenceResult<String>;
}

#[derive(Debug, Serialize)]
struct SummarizeRequest<'a> {
    inputs: &'a str,
    parameters: SummarizeParameters,
}

#[derive(Debug, Serialize)]
struct SummarizeParameters {
    max_length: u32,
    min_length: u32,
    do_sample: bool,
}

#[derive(Debug, Deserialize)]
struct SummaryCandidate {
    summary_text: String,
}

/// HTTP client for the hosted summarization endpoint.
pub struct SummarizerClient {
    http: Client,
    config: SummarizerConfig,
}

impl SummarizerClient {
    /// Create a new client from configuration.
    pub fn new(config: SummarizerConfig) -> InferenceResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("tubepulse-inference/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(InferenceError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> InferenceResult<Self> {
        Self::new(SummarizerConfig::from_env()?)
    }
}

#[async_trait]
impl Summarizer for SummarizerClient {
    async fn summarize(&self, text: &str) -> InferenceResult<String> {
        debug!("Summarizing chunk of {} chars", text.chars().count());

        let payload = SummarizeRequest {
            inputs: text,
            parameters: SummarizeParameters {
                max_length: SUMMARY_MAX_LENGTH,
                min_length: SUMMARY_MIN_LENGTH,
                do_sample: false,
            },
        };

        let response = self
            .http
            .post(&self.config.endpoint_url)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::EndpointFailed(status.as_u16(), body));
        }

        let candidates: Vec<SummaryCandidate> = response.json().await?;

        candidates
            .into_iter()
            .next()
            .map(|c| c.summary_text)
            .ok_or_else(|| InferenceError::invalid_response("empty candidate list"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> SummarizerClient {
        SummarizerClient::new(SummarizerConfig {
            endpoint_url: format!("{}/invocations", server.uri()),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_summarize_sends_deterministic_parameters() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/invocations"))
            .and(body_json(json!({
                "inputs": "a long transcript chunk",
                "parameters": {
                    "max_length": 150,
                    "min_length": 40,
                    "do_sample": false
                }
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"summary_text": "a short summary"}])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let summary = client.summarize("a long transcript chunk").await.unwrap();
        assert_eq!(summary, "a short summary");
    }

    #[tokio::test]
    async fn test_summarize_endpoint_failure_propagates() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("model loading"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.summarize("chunk").await.unwrap_err();
        assert!(matches!(err, InferenceError::EndpointFailed(503, _)));
    }

    #[tokio::test]
    async fn test_summarize_empty_candidates_rejected() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.summarize("chunk").await.unwrap_err();
        assert!(matches!(err, InferenceError::InvalidResponse(_)));
    }
}
