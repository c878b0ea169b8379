//! Similar-genre source: content-based candidate ranking
//!
//! Ranks every movie of the catalog by how closely its genre profile
//! matches a reference movie.
//!
//! ## Algorithm
//! 1. Skip the reference movie itself (by id)
//! 2. Score each remaining movie against the reference
//! 3. Sort by score descending, ties broken by movie id ascending so the
//!    ranking is reproducible
//! 4. Number the ranking and return it whole (filtering happens downstream)
//!
//! Each candidate remembers the catalog slot it was scored from, so a
//! record that reuses another's id is still resolved to itself.

use crate::encoder::{EncodedCatalog, EncodedMovie};
use crate::similarity::{CosineSimilarity, SimilarityScorer};
use crate::types::Candidate;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Ranks catalog movies by genre similarity to a reference movie
#[derive(Clone)]
pub struct SimilarGenreSource {
    scorer: Arc<dyn SimilarityScorer>,
}

impl SimilarGenreSource {
    /// Create a source scoring with cosine similarity
    pub fn new() -> Self {
        Self::with_scorer(CosineSimilarity)
    }

    /// Create a source with a custom scorer
    pub fn with_scorer(scorer: impl SimilarityScorer + 'static) -> Self {
        Self {
            scorer: Arc::new(scorer),
        }
    }

    pub fn scorer_name(&self) -> &str {
        self.scorer.name()
    }

    /// Rank every movie except the reference, most similar first
    #[instrument(skip(self, reference, catalog), fields(reference_id = %reference.id()))]
    pub fn rank(&self, reference: &EncodedMovie<'_>, catalog: &EncodedCatalog<'_>) -> Vec<Candidate> {
        let mut candidates: Vec<Candidate> = catalog
            .iter()
            .enumerate()
            .filter(|(_, other)| other.id() != reference.id())
            .map(|(index, other)| {
                let score = self.scorer.score(&reference.vector, &other.vector);
                let mut candidate = Candidate::new(other.id().clone(), score, index);
                candidate.degenerate = other.vector.is_zero();
                candidate
            })
            .collect();

        sort_candidates(&mut candidates);
        for (position, candidate) in candidates.iter_mut().enumerate() {
            candidate.rank = position + 1;
        }

        debug!(
            "Ranked {} candidates with {} similarity",
            candidates.len(),
            self.scorer.name()
        );
        candidates
    }
}

impl Default for SimilarGenreSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Sort by score DESC, then movie id ASC
pub fn sort_candidates(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.movie_id.cmp(&b.movie_id))
    });
}
