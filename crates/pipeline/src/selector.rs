//! Picks the single movie to recommend to a user.
//!
//! ## Algorithm
//! 1. Order the user's ratings by recency; fewer than two means no
//!    recommendation
//! 2. Take the latest and prior ratings and resolve both to movies
//!    (latest first)
//! 3. The reference is the latest movie unless the prior one scored
//!    strictly higher
//! 4. Rank every other movie by genre similarity to the reference
//! 5. Drop candidates the user already rated (and, under
//!    `DegeneratePolicy::Exclude`, candidates with no genres)
//! 6. The head of what is left wins; it is resolved through the catalog
//!    slot it was scored from, not looked up again by id

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{AlreadyRatedFilter, DegenerateVectorFilter};
use crate::outcome::{DegeneratePolicy, NoRecommendation, Selection};
use data_loader::{CatalogSnapshot, Genre, Movie, Rating};
use sources::user_context::build_user_context;
use sources::{EncodedCatalog, GenreEncoder, SimilarGenreSource};
use tracing::{debug, instrument};

/// Chooses one movie per call from freshly encoded catalog data.
///
/// Holds no per-call state, so one selector can serve any number of
/// concurrent calls.
pub struct RecommendationSelector {
    source: SimilarGenreSource,
    pipeline: FilterPipeline,
    policy: DegeneratePolicy,
}

impl RecommendationSelector {
    /// Selector with cosine similarity and the default degenerate policy
    pub fn new() -> Self {
        Self::with_policy(DegeneratePolicy::default())
    }

    pub fn with_policy(policy: DegeneratePolicy) -> Self {
        let mut pipeline = FilterPipeline::new().add_filter(AlreadyRatedFilter);
        if policy == DegeneratePolicy::Exclude {
            pipeline = pipeline.add_filter(DegenerateVectorFilter);
        }

        let source = SimilarGenreSource::new();
        debug!(
            "Selector uses {} similarity, filters {:?}",
            source.scorer_name(),
            pipeline.filter_names()
        );

        Self {
            source,
            pipeline,
            policy,
        }
    }

    pub fn policy(&self) -> DegeneratePolicy {
        self.policy
    }

    /// Encode the catalog and select in one call
    pub fn select(
        &self,
        movies: &[Movie],
        genres: &[Genre],
        ratings: &[Rating],
        user_id: &str,
    ) -> Result<Selection, NoRecommendation> {
        let encoder = GenreEncoder::from_genres(genres);
        let catalog = encoder.encode_catalog(movies);
        debug!(
            "Encoded {} movies over {} genres",
            catalog.len(),
            catalog.dimension()
        );
        self.select_encoded(&catalog, ratings, user_id)
    }

    /// Select from a fetched snapshot
    pub fn select_snapshot(
        &self,
        snapshot: &CatalogSnapshot,
        user_id: &str,
    ) -> Result<Selection, NoRecommendation> {
        self.select(
            snapshot.movies(),
            snapshot.genres(),
            snapshot.ratings(),
            user_id,
        )
    }

    /// Select against an already encoded catalog
    #[instrument(skip(self, catalog, ratings), fields(user_id = %user_id))]
    pub fn select_encoded(
        &self,
        catalog: &EncodedCatalog<'_>,
        ratings: &[Rating],
        user_id: &str,
    ) -> Result<Selection, NoRecommendation> {
        let context = build_user_context(ratings, user_id);

        let (latest, prior) =
            context
                .latest_pair()
                .ok_or_else(|| NoRecommendation::InsufficientHistory {
                    user_id: user_id.to_string(),
                    found: context.history.len(),
                })?;

        let latest_movie =
            catalog
                .get(&latest.movie_id)
                .ok_or_else(|| NoRecommendation::MovieNotFound {
                    movie_id: latest.movie_id.clone(),
                })?;
        let prior_movie =
            catalog
                .get(&prior.movie_id)
                .ok_or_else(|| NoRecommendation::MovieNotFound {
                    movie_id: prior.movie_id.clone(),
                })?;

        // Equal scores favour the most recent rating
        let reference = if latest.score >= prior.score {
            latest_movie
        } else {
            prior_movie
        };
        debug!(
            "Reference movie {} (latest {} scored {}, prior {} scored {})",
            reference.id(),
            latest.movie_id,
            latest.score,
            prior.movie_id,
            prior.score
        );

        if reference.vector.is_zero() {
            return Err(NoRecommendation::DegenerateVector {
                movie_id: reference.id().clone(),
            });
        }

        let ranked = self.source.rank(reference, catalog);
        let ranked_count = ranked.len();
        let remaining = self.pipeline.apply(ranked, &context);

        let winner = remaining
            .first()
            .ok_or_else(|| NoRecommendation::NoUnratedCandidate {
                user_id: user_id.to_string(),
            })?;

        let movie = catalog
            .at(winner.catalog_index)
            .ok_or_else(|| NoRecommendation::MovieNotFound {
                movie_id: winner.movie_id.clone(),
            })?
            .movie
            .clone();

        debug!(
            "Selected movie {} (similarity {:.4}, rank {} of {})",
            movie.id, winner.score, winner.rank, ranked_count
        );

        Ok(Selection {
            movie,
            reference_movie_id: reference.id().clone(),
            similarity: winner.score,
            rank: winner.rank,
        })
    }
}

impl Default for RecommendationSelector {
    fn default() -> Self {
        Self::new()
    }
}
