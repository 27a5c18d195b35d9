//! Semantic candidate-offer matching.
//!
//! Ranks uploaded PDF résumés against a job offer: text and contact
//! extraction, translation and embedding through an external NLP service,
//! cosine-similarity scoring, and a keyword-overlap rationale per candidate.
//! The surrounding API/persistence layer only needs [`MatchPipeline`],
//! [`OfferProfile`] and the [`CandidateMatch`] results it returns.

pub mod config;
pub mod extraction;
pub mod pipeline;
pub mod provider;
pub mod rationale;
pub mod scoring;
pub mod storage;

pub use config::ProviderConfig;
pub use pipeline::{CandidateMatch, MatchPipeline, OfferDetails, OfferProfile, UploadedFile};
pub use provider::{HttpNlpClient, NlpProvider, ProviderError};
pub use storage::{FileStore, LocalFileStore};
