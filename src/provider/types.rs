// src/provider/types.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tagged failure reason for a single provider call.
///
/// Collapsed to the documented degraded default at the [`NlpProvider`]
/// boundary; kept distinct here so tests and diagnostics can tell a timeout
/// from a bad status from a transport failure.
///
/// [`NlpProvider`]: super::NlpProvider
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider request timed out")]
    Timeout,

    #[error("provider returned status {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Network(reqwest::Error),

    #[error("failed to decode provider response: {0}")]
    Decode(reqwest::Error),
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_decode() {
            Self::Decode(e)
        } else {
            Self::Network(e)
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TextRequest<'a> {
    pub text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct TranslateResponse {
    pub translation: String,
}

#[derive(Debug, Deserialize)]
pub struct VectorizeResponse {
    pub vector: Vec<f32>,
}

#[derive(Debug, Deserialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ExplainRequest<'a> {
    pub cv_text: &'a str,
    pub offer_text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ExplainResponse {
    pub explanation: String,
}
