// src/scoring.rs
use tracing::warn;

/// Cosine similarity between two embedding vectors, scaled to a 0-100 score.
///
/// An empty vector means the embedding is unknown (provider failure) and
/// scores exactly 0.0, as does any zero-magnitude input. Symmetric, pure,
/// and deliberately unclamped beyond the natural range of the cosine.
///
/// Vectors from the same provider share a dimensionality. If lengths ever
/// differ, the dot product runs over the shared prefix while each magnitude
/// covers its full vector, which only lowers the score.
pub fn cosine_score(a: &[f32], b: &[f32]) -> f32 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    if a.len() != b.len() {
        warn!(
            a_len = a.len(),
            b_len = b.len(),
            "embedding dimension mismatch; comparing shared prefix"
        );
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let mag_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let mag_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }

    (dot / (mag_a * mag_b)) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_vectors_score_near_100() {
        let a = vec![0.3, -1.2, 4.5, 0.01];
        let score = cosine_score(&a, &a);
        assert!((score - 100.0).abs() < 1e-3);
    }

    #[test]
    fn score_is_symmetric() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![-0.5, 0.25, 4.0];
        assert_eq!(cosine_score(&a, &b), cosine_score(&b, &a));
    }

    #[test]
    fn orthogonal_vectors_score_zero() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert_eq!(cosine_score(&a, &b), 0.0);
    }

    #[test]
    fn empty_vectors_score_exactly_zero() {
        let a = vec![1.0, 2.0];
        assert_eq!(cosine_score(&a, &[]), 0.0);
        assert_eq!(cosine_score(&[], &a), 0.0);
        assert_eq!(cosine_score(&[], &[]), 0.0);
    }

    #[test]
    fn zero_magnitude_scores_zero() {
        let zero = vec![0.0, 0.0, 0.0];
        let a = vec![1.0, 2.0, 3.0];
        assert_eq!(cosine_score(&zero, &a), 0.0);
        assert_eq!(cosine_score(&zero, &zero), 0.0);
    }

    #[test]
    fn mismatched_lengths_use_shared_prefix() {
        // Shared prefix is identical; the longer magnitude drags the score
        // below 100 instead of raising an error.
        let a = vec![1.0, 1.0];
        let b = vec![1.0, 1.0, 1.0];
        let score = cosine_score(&a, &b);
        assert!(score > 0.0 && score < 100.0);
    }

    #[test]
    fn opposite_vectors_score_negative() {
        let a = vec![1.0, 1.0];
        let b = vec![-1.0, -1.0];
        assert!((cosine_score(&a, &b) + 100.0).abs() < 1e-3);
    }
}
