// src/provider/mod.rs
//! Adapter for the external NLP service (translation, embeddings, keyword
//! extraction, generative explanations).
//!
//! The pipeline must stay usable when the service is down, so every
//! pipeline-critical call collapses transport failures to a well-defined
//! empty value at this boundary. The raw `try_*` operations on
//! [`HttpNlpClient`] keep the tagged failure reason for callers that need it.

pub mod client;
pub mod types;

pub use client::HttpNlpClient;
pub use types::ProviderError;

use async_trait::async_trait;

/// The operations the matching pipeline consumes from the NLP service.
///
/// `translate`, `embed` and `keywords` degrade to empty values on any
/// provider failure. `explain` is an on-demand enrichment and reports its
/// failure inline in the returned string instead.
#[async_trait]
pub trait NlpProvider: Send + Sync {
    async fn translate(&self, text: &str) -> String;
    async fn embed(&self, text: &str) -> Vec<f32>;
    async fn keywords(&self, text: &str) -> Vec<String>;
    async fn explain(&self, cv_text: &str, offer_text: &str) -> String;
}
