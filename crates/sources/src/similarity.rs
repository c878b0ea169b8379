//! Similarity between encoded movies.

use crate::encoder::GenreVector;

/// Scores how alike two encoded movies are.
///
/// Implementations must be symmetric: `score(a, b) == score(b, a)`.
pub trait SimilarityScorer: Send + Sync {
    /// Returns the name of this scorer (for logging/debugging)
    fn name(&self) -> &str;

    fn score(&self, a: &GenreVector, b: &GenreVector) -> f32;
}

/// Cosine similarity measure.
///
/// For one-hot vectors: shared genres / sqrt(|A| * |B|), always in [0, 1].
#[derive(Debug, Clone, Copy, Default)]
pub struct CosineSimilarity;

impl SimilarityScorer for CosineSimilarity {
    fn name(&self) -> &str {
        "cosine"
    }

    fn score(&self, a: &GenreVector, b: &GenreVector) -> f32 {
        cosine_similarity(a.as_slice(), b.as_slice())
    }
}

/// Compute cosine similarity between two vectors.
///
/// Returns 0.0 instead of NaN when either vector has zero magnitude, and
/// also for empty or length-mismatched inputs.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.is_empty() || b.is_empty() || a.len() != b.len() {
        return 0.0;
    }

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;

    for (&x, &y) in a.iter().zip(b.iter()) {
        let x = x as f64;
        let y = y as f64;
        dot = x.mul_add(y, dot);
        norm_a = x.mul_add(x, norm_a);
        norm_b = y.mul_add(y, norm_b);
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom < 1e-12 {
        return 0.0;
    }

    (dot / denom) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(values: &[f32]) -> GenreVector {
        GenreVector::from(values.to_vec())
    }

    #[test]
    fn test_identical() {
        let a = v(&[1.0, 0.0, 1.0, 1.0]);
        let sim = CosineSimilarity.score(&a, &a);
        assert!((sim - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_disjoint_genres() {
        // [Action] vs [Comedy]
        let sim = CosineSimilarity.score(&v(&[1.0, 0.0]), &v(&[0.0, 1.0]));
        assert_eq!(sim, 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        let a = v(&[1.0, 1.0, 1.0, 1.0, 0.0, 0.0]);
        let b = v(&[0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
        // Overlap = 2, sqrt(4*4) = 4, so cosine = 0.5
        assert!((CosineSimilarity.score(&a, &b) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_symmetric_and_bounded() {
        let vectors = [
            v(&[1.0, 0.0, 0.0, 1.0]),
            v(&[1.0, 1.0, 0.0, 0.0]),
            v(&[0.0, 1.0, 1.0, 1.0]),
            v(&[1.0, 1.0, 1.0, 1.0]),
            v(&[0.0, 0.0, 0.0, 0.0]),
        ];

        for a in &vectors {
            for b in &vectors {
                let ab = CosineSimilarity.score(a, b);
                let ba = CosineSimilarity.score(b, a);
                assert_eq!(ab, ba);
                assert!((0.0..=1.0 + 1e-6).contains(&ab), "out of bounds: {}", ab);
            }
        }
    }

    #[test]
    fn test_zero_magnitude_is_zero_not_nan() {
        let zero = v(&[0.0, 0.0, 0.0]);
        let a = v(&[1.0, 0.0, 1.0]);
        assert_eq!(CosineSimilarity.score(&zero, &a), 0.0);
        assert_eq!(CosineSimilarity.score(&zero, &zero), 0.0);
    }

    #[test]
    fn test_empty_and_mismatched() {
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 0.0]), 0.0);
    }
}
