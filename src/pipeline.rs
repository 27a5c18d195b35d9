// src/pipeline.rs
//! Batch orchestration: one job offer against a set of uploaded résumés,
//! producing candidates ranked by semantic similarity.

use std::cmp::Ordering;

use tracing::{info, warn};

use crate::extraction::{contact, text};
use crate::provider::NlpProvider;
use crate::rationale;
use crate::scoring;
use crate::storage::FileStore;

/// Descriptive fields of a job offer.
///
/// Optional fields fall back to `N/A` inside the embedding context so a
/// sparse posting still produces a usable vector.
#[derive(Debug, Clone, Default)]
pub struct OfferDetails {
    pub title: String,
    pub description: String,
    pub skills_required: Option<String>,
    pub responsibilities: Option<String>,
    pub experience_years: Option<u32>,
    pub salary_range: Option<String>,
}

impl OfferDetails {
    /// Unified context string fed to translation and embedding. Richer than
    /// the bare description so the offer vector captures the whole posting.
    pub fn context(&self) -> String {
        format!(
            "Puesto: {}.\n\
             Descripción: {}.\n\
             Skills requeridos: {}.\n\
             Responsabilidades: {}.\n\
             Experiencia mínima: {} años.\n\
             Rango Salarial: {}.",
            self.title,
            self.description,
            self.skills_required.as_deref().unwrap_or("N/A"),
            self.responsibilities.as_deref().unwrap_or("N/A"),
            self.experience_years.unwrap_or(0),
            self.salary_range.as_deref().unwrap_or("N/A"),
        )
    }
}

/// An offer prepared for matching: translated context plus its embedding.
///
/// Built once per offer, outside the batch loop. The vector is the fixed
/// comparison target for every candidate submitted against this offer.
#[derive(Debug, Clone)]
pub struct OfferProfile {
    pub details: OfferDetails,
    pub context_en: String,
    pub vector: Vec<f32>,
}

impl OfferProfile {
    pub async fn build(provider: &dyn NlpProvider, details: OfferDetails) -> Self {
        info!("Preparing offer profile: {}", details.title);

        let context = details.context();
        let context_en = provider.translate(&context).await;
        let vector = provider.embed(&context_en).await;

        Self {
            details,
            context_en,
            vector,
        }
    }
}

/// One uploaded résumé: its filename and raw bytes.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Fully processed candidate. Assembled once per upload and never mutated
/// after the pipeline completes.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateMatch {
    pub file_name: String,
    /// Public retrieval reference from the file store; empty when storage
    /// failed for this file.
    pub file_ref: String,
    pub text: String,
    pub text_en: String,
    pub vector: Vec<f32>,
    pub email: Option<String>,
    pub phone: String,
    /// Cosine similarity against the offer vector, scaled to [0, 100].
    pub score: f32,
    pub rationale: String,
}

/// Orchestrates extraction, enrichment, scoring and rationale synthesis for
/// an upload batch. Per-file failures degrade that file's fields; they never
/// remove it from the result or abort sibling files.
pub struct MatchPipeline<P, S> {
    provider: P,
    store: S,
}

impl<P: NlpProvider, S: FileStore> MatchPipeline<P, S> {
    pub fn new(provider: P, store: S) -> Self {
        Self { provider, store }
    }

    /// Process every file against the offer, then rank descending by score.
    /// The sort is stable, so equal scores keep their upload order.
    pub async fn run(&self, offer: &OfferProfile, files: Vec<UploadedFile>) -> Vec<CandidateMatch> {
        let mut results = Vec::with_capacity(files.len());

        for file in files {
            results.push(self.process_file(offer, file).await);
        }

        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        results
    }

    /// On-demand generative explanation for one already-ranked candidate.
    pub async fn explain(&self, candidate: &CandidateMatch, offer: &OfferProfile) -> String {
        self.provider
            .explain(&candidate.text, &offer.details.description)
            .await
    }

    async fn process_file(&self, offer: &OfferProfile, file: UploadedFile) -> CandidateMatch {
        info!("Analyzing file: {}", file.name);

        let file_ref = match self.store.store(&file.name, &file.bytes).await {
            Ok(reference) => reference,
            Err(e) => {
                warn!("Storing {} failed: {:#}", file.name, e);
                String::new()
            }
        };

        let text = text::extract_text(&file.bytes);
        let email = contact::extract_email(&text);
        let phone = contact::extract_phone(&text);

        let text_en = self.provider.translate(&text).await;
        let vector = self.provider.embed(&text_en).await;

        let score = scoring::cosine_score(&vector, &offer.vector);
        let rationale = rationale::generate(&self.provider, &text_en, &offer.context_en).await;

        CandidateMatch {
            file_name: file.name,
            file_ref,
            text,
            text_en,
            vector,
            email,
            phone,
            score,
            rationale,
        }
    }
}
