//! Client side of the sentiment analysis service.
//!
//! The service is reached through [`SentimentService`] so handlers can be
//! exercised without a network. [`HttpSentimentClient`] is the production
//! implementation: one `POST /analyze-sentiment/` per call, no retries.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::AnalysisError;

pub const ANALYZE_PATH: &str = "/analyze-sentiment/";

#[derive(Debug, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub text: &'a str,
}

/// Verdict returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: String,
    pub score: f64,
}

#[async_trait]
pub trait SentimentService: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<SentimentResult, AnalysisError>;
}

pub struct HttpSentimentClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSentimentClient {
    pub fn new(
        base_url: &str,
        request_timeout: Duration,
        connect_timeout: Duration,
    ) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), ANALYZE_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SentimentService for HttpSentimentClient {
    async fn analyze(&self, text: &str) -> Result<SentimentResult, AnalysisError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&AnalyzeRequest { text })
            .send()
            .await
            .map_err(|e| {
                let err = AnalysisError::from(e);
                warn!("Sentiment request to {} failed: {err}", self.endpoint);
                err
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Sentiment service answered {status}");
            return Err(AnalysisError::from_status(status.as_u16()));
        }

        let result = response.json::<SentimentResult>().await.map_err(|e| {
            warn!("Sentiment response body error: {e}");
            AnalysisError::from_body_error(e, status.as_u16())
        })?;

        debug!("Sentiment verdict: {} ({:.4})", result.label, result.score);
        Ok(result)
    }
}
