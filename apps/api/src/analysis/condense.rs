//! Optional text condensation via an external abstractive summarization
//! backend (HuggingFace-style inference endpoint).
//!
//! Condensation is the one recoverable stage in the pipeline: when the
//! backend fails, the caller analyzes the raw text instead of aborting.
//! Sampling is disabled so identical input and model version yield
//! identical output.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// The summarization model served by the backend.
/// Intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "facebook/bart-large-cnn";
const MAX_RETRIES: u32 = 3;

/// Target length band for a condensed text, in words.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CondensationBand {
    pub min_words: usize,
    pub max_words: usize,
}

impl Default for CondensationBand {
    fn default() -> Self {
        Self {
            min_words: 30,
            max_words: 150,
        }
    }
}

#[derive(Debug, Error)]
pub enum CondenseError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Summarizer returned no content")]
    EmptyContent,
}

/// The condenser seam. Production wires `HttpCondenser` when a backend
/// is configured and `NoopCondenser` otherwise; tests substitute stubs.
#[async_trait]
pub trait Condenser: Send + Sync {
    async fn condense(&self, text: &str, band: CondensationBand)
        -> Result<String, CondenseError>;
}

/// Pass-through condenser used when no summarizer backend is configured.
pub struct NoopCondenser;

#[async_trait]
impl Condenser for NoopCondenser {
    async fn condense(
        &self,
        text: &str,
        _band: CondensationBand,
    ) -> Result<String, CondenseError> {
        Ok(text.to_string())
    }
}

#[derive(Debug, Serialize)]
struct SummarizeRequest<'a> {
    inputs: &'a str,
    parameters: SummarizeParameters,
}

#[derive(Debug, Serialize)]
struct SummarizeParameters {
    min_length: usize,
    max_length: usize,
    /// Always false — summaries must be deterministic for a given input.
    do_sample: bool,
}

#[derive(Debug, Deserialize)]
struct SummarizeResponse {
    summary_text: String,
}

/// HTTP client for the summarization backend. Retries on 429 and 5xx
/// with exponential backoff.
pub struct HttpCondenser {
    client: Client,
    url: String,
    api_key: Option<String>,
}

impl HttpCondenser {
    pub fn new(url: String, api_key: Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(60))
                .build()?,
            url,
            api_key,
        })
    }
}

#[async_trait]
impl Condenser for HttpCondenser {
    async fn condense(
        &self,
        text: &str,
        band: CondensationBand,
    ) -> Result<String, CondenseError> {
        let request_body = SummarizeRequest {
            inputs: text,
            parameters: SummarizeParameters {
                min_length: band.min_words,
                max_length: band.max_words,
                do_sample: false,
            },
        };

        let mut last_error: Option<CondenseError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "summarizer attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let mut request = self.client.post(&self.url).json(&request_body);
            if let Some(key) = &self.api_key {
                request = request.bearer_auth(key);
            }

            let response = match request.send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(CondenseError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("summarizer returned {}: {}", status, body);
                last_error = Some(CondenseError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(CondenseError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let summaries: Vec<SummarizeResponse> = response.json().await?;
            let summary = summaries
                .into_iter()
                .next()
                .map(|s| s.summary_text)
                .filter(|s| !s.trim().is_empty())
                .ok_or(CondenseError::EmptyContent)?;

            debug!(
                input_words = word_count(text),
                summary_words = word_count(&summary),
                "condensation succeeded"
            );
            return Ok(summary);
        }

        Err(last_error.unwrap_or(CondenseError::EmptyContent))
    }
}

/// Whitespace-separated word count, used for the band skip decision.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_noop_condenser_is_identity() {
        let text = "a short resume body";
        let out = NoopCondenser
            .condense(text, CondensationBand::default())
            .await
            .unwrap();
        assert_eq!(out, text);
    }

    #[test]
    fn test_word_count_splits_on_whitespace() {
        assert_eq!(word_count("one  two\nthree\tfour"), 4);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
    }

    #[test]
    fn test_default_band_is_30_to_150() {
        let band = CondensationBand::default();
        assert_eq!(band.min_words, 30);
        assert_eq!(band.max_words, 150);
    }
}
