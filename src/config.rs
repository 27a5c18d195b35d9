// src/config.rs
use anyhow::Result;
use std::time::Duration;

/// Character cap applied to text submitted for translation.
pub const DEFAULT_TRANSLATE_MAX_CHARS: usize = 2500;
/// Character cap applied to text submitted for keyword extraction.
pub const DEFAULT_KEYWORDS_MAX_CHARS: usize = 3000;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const PROBE_TIMEOUT_SECS: u64 = 5;

/// Connection settings for the external NLP service, injected into the
/// client at construction.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub request_timeout: Duration,
    pub probe_timeout: Duration,
    pub translate_max_chars: usize,
    pub keywords_max_chars: usize,
}

impl ProviderConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            probe_timeout: Duration::from_secs(PROBE_TIMEOUT_SECS),
            translate_max_chars: DEFAULT_TRANSLATE_MAX_CHARS,
            keywords_max_chars: DEFAULT_KEYWORDS_MAX_CHARS,
        }
    }

    /// Read the service endpoint from `NLP_SERVICE_URL`.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("NLP_SERVICE_URL")
            .map_err(|_| anyhow::anyhow!("NLP_SERVICE_URL environment variable not set"))?;
        Ok(Self::new(base_url))
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ProviderConfig::new("http://10.0.0.5:8000/");
        assert_eq!(config.base_url, "http://10.0.0.5:8000");
    }

    #[test]
    fn defaults_match_service_limits() {
        let config = ProviderConfig::new("http://localhost:8000");
        assert_eq!(config.translate_max_chars, 2500);
        assert_eq!(config.keywords_max_chars, 3000);
    }
}
