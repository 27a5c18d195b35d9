// src/provider/client.rs
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, warn};

use super::types::{
    ExplainRequest, ExplainResponse, KeywordsResponse, ProviderError, TextRequest,
    TranslateResponse, VectorizeResponse,
};
use super::NlpProvider;
use crate::config::ProviderConfig;

const TRANSLATE_ENDPOINT: &str = "/translate";
const VECTORIZE_ENDPOINT: &str = "/vectorize";
const KEYWORDS_ENDPOINT: &str = "/keywords";
const EXPLAIN_ENDPOINT: &str = "/explain";

/// HTTP client for the external NLP service.
pub struct HttpNlpClient {
    client: Client,
    config: ProviderConfig,
}

impl HttpNlpClient {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Probe the service root and log the outcome. Called once at startup;
    /// an unreachable service only degrades results, so this never blocks
    /// or aborts anything.
    pub async fn check_availability(&self) -> bool {
        info!("Checking NLP service at: {}", self.config.base_url);

        let result = self
            .client
            .get(&self.config.base_url)
            .timeout(self.config.probe_timeout)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                info!("NLP service operational and reachable");
                true
            }
            Ok(response) => {
                warn!("NLP service responded with status {}", response.status());
                false
            }
            Err(e) => {
                warn!("NLP service unreachable: {}", e);
                false
            }
        }
    }

    /// Translation with the tagged failure reason preserved. Input is capped
    /// at the configured character limit before submission.
    pub async fn try_translate(&self, text: &str) -> Result<String, ProviderError> {
        let text = truncate_chars(text, self.config.translate_max_chars);
        let response: TranslateResponse =
            self.post_json(TRANSLATE_ENDPOINT, &TextRequest { text }).await?;
        Ok(response.translation)
    }

    pub async fn try_embed(&self, text: &str) -> Result<Vec<f32>, ProviderError> {
        let response: VectorizeResponse =
            self.post_json(VECTORIZE_ENDPOINT, &TextRequest { text }).await?;
        Ok(response.vector)
    }

    pub async fn try_keywords(&self, text: &str) -> Result<Vec<String>, ProviderError> {
        let text = truncate_chars(text, self.config.keywords_max_chars);
        let response: KeywordsResponse =
            self.post_json(KEYWORDS_ENDPOINT, &TextRequest { text }).await?;
        Ok(response.keywords)
    }

    pub async fn try_explain(
        &self,
        cv_text: &str,
        offer_text: &str,
    ) -> Result<String, ProviderError> {
        let response: ExplainResponse = self
            .post_json(EXPLAIN_ENDPOINT, &ExplainRequest { cv_text, offer_text })
            .await?;
        Ok(response.explanation)
    }

    async fn post_json<T, R>(&self, endpoint: &str, payload: &T) -> Result<R, ProviderError>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.config.base_url, endpoint);

        let response = self.client.post(&url).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        Ok(response.json::<R>().await?)
    }
}

#[async_trait]
impl NlpProvider for HttpNlpClient {
    async fn translate(&self, text: &str) -> String {
        match self.try_translate(text).await {
            Ok(translation) => translation,
            Err(e) => {
                warn!("translation degraded to empty: {}", e);
                String::new()
            }
        }
    }

    async fn embed(&self, text: &str) -> Vec<f32> {
        match self.try_embed(text).await {
            Ok(vector) => vector,
            Err(e) => {
                warn!("embedding degraded to empty: {}", e);
                Vec::new()
            }
        }
    }

    async fn keywords(&self, text: &str) -> Vec<String> {
        match self.try_keywords(text).await {
            Ok(keywords) => keywords,
            Err(e) => {
                warn!("keyword extraction degraded to empty: {}", e);
                Vec::new()
            }
        }
    }

    // Unlike the three calls above, explain reports its failure inline: it
    // is requested on demand as a diagnostic, so the cause must reach the
    // reader instead of vanishing into an empty string.
    async fn explain(&self, cv_text: &str, offer_text: &str) -> String {
        match self.try_explain(cv_text, offer_text).await {
            Ok(explanation) => explanation,
            Err(ProviderError::Status(code)) => {
                format!("Error: el servidor respondió con estado {}", code)
            }
            Err(e) => format!("Error crítico: {}", e),
        }
    }
}

/// Cap `text` at `max_chars` characters without splitting a code point.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Nothing listens on port 9 (discard); connection attempts fail fast.
    fn unreachable_client() -> HttpNlpClient {
        let config = ProviderConfig::new("http://127.0.0.1:9")
            .with_request_timeout(std::time::Duration::from_secs(2));
        HttpNlpClient::new(config).expect("client construction")
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("ñandú", 3), "ñan");
        assert_eq!(truncate_chars("short", 100), "short");
        assert_eq!(truncate_chars("", 10), "");
    }

    #[tokio::test]
    async fn raw_call_keeps_tagged_failure() {
        let client = unreachable_client();
        let result = client.try_translate("hola").await;
        assert!(matches!(
            result,
            Err(ProviderError::Network(_) | ProviderError::Timeout)
        ));
    }

    #[tokio::test]
    async fn trait_calls_collapse_to_defaults() {
        let client = unreachable_client();
        assert_eq!(client.translate("hola").await, "");
        assert!(client.embed("hola").await.is_empty());
        assert!(client.keywords("hola").await.is_empty());
    }

    #[tokio::test]
    async fn explain_reports_failure_inline() {
        let client = unreachable_client();
        let explanation = client.explain("cv", "offer").await;
        assert!(explanation.starts_with("Error"));
    }

    #[tokio::test]
    async fn availability_probe_reports_down_service() {
        let client = unreachable_client();
        assert!(!client.check_availability().await);
    }
}
