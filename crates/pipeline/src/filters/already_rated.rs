//! Filter to remove movies the user has already rated.
//!
//! Every recommendation goes through this filter: a movie the user has
//! rated at any point is never recommended back to them.

use crate::traits::Filter;
use sources::{Candidate, UserContext};

/// Removes candidates that the user has already rated.
///
/// ## Algorithm
/// Uses the HashSet in UserContext.rated_movies for O(1) lookups.
pub struct AlreadyRatedFilter;

impl Filter for AlreadyRatedFilter {
    fn name(&self) -> &str {
        "AlreadyRatedFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, context: &UserContext) -> Vec<Candidate> {
        candidates
            .into_iter()
            .filter(|candidate| !context.has_rated(&candidate.movie_id))
            .collect()
    }
}
