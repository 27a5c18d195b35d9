// src/rationale.rs
//! Human-readable justification for a candidate's score, derived from the
//! keyword overlap between the offer and the candidate.

use std::collections::BTreeSet;

use crate::provider::NlpProvider;

const MAX_HIGHLIGHTED_SKILLS: usize = 6;

/// Returned when keywords were available for at least one side but the two
/// sets share no term.
pub const NO_OVERLAP_RATIONALE: &str = "El análisis semántico indica similitud contextual \
     general, aunque no se detectaron coincidencias terminológicas directas.";

/// Returned when keyword extraction produced nothing at all (typically a
/// degraded provider); the score still stands on vector similarity alone.
pub const DEGRADED_RATIONALE: &str = "Análisis completado basado en similitud vectorial.";

/// Build the justification sentence for one candidate.
///
/// Keywords for both texts come from the provider, are lower-cased into
/// sets, and the intersection is reported in sorted order so the same
/// inputs always produce the same sentence. Never fails: a degraded
/// provider lands in the fallback sentence, not in an error.
pub async fn generate(provider: &dyn NlpProvider, cv_text_en: &str, offer_text_en: &str) -> String {
    let cv_keywords = provider.keywords(cv_text_en).await;
    let offer_keywords = provider.keywords(offer_text_en).await;

    if cv_keywords.is_empty() && offer_keywords.is_empty() {
        return DEGRADED_RATIONALE.to_string();
    }

    let cv_set: BTreeSet<String> = cv_keywords.iter().map(|k| k.to_lowercase()).collect();
    let offer_set: BTreeSet<String> = offer_keywords.iter().map(|k| k.to_lowercase()).collect();

    let common: Vec<&String> = offer_set.intersection(&cv_set).collect();
    if common.is_empty() {
        return NO_OVERLAP_RATIONALE.to_string();
    }

    let skills = common
        .iter()
        .take(MAX_HIGHLIGHTED_SKILLS)
        .map(|skill| title_case(skill))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Perfil compatible. Se detectaron coincidencias clave en competencias \
         requeridas: {}. Esto valida la experiencia técnica solicitada.",
        skills
    )
}

/// Upper-case the first letter of each word, lower-case the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;

    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }

    out
}
