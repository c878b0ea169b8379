//! The FilterPipeline chains multiple filters.

use crate::traits::Filter;
use sources::{Candidate, UserContext};
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(AlreadyRatedFilter)
///     .add_filter(DegenerateVectorFilter);
///
/// let remaining = pipeline.apply(ranked, &context);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the configured filters, in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// Stops early once no candidate is left.
    pub fn apply(&self, candidates: Vec<Candidate>, context: &UserContext) -> Vec<Candidate> {
        let mut current = candidates;
        for filter in &self.filters {
            if current.is_empty() {
                break;
            }
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, context);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{AlreadyRatedFilter, DegenerateVectorFilter};
    use data_loader::MovieId;

    fn candidates() -> Vec<Candidate> {
        vec![
            Candidate::new(1, 0.9, 0),
            Candidate {
                degenerate: true,
                ..Candidate::new(2, 0.0, 1)
            },
            Candidate::new(3, 0.4, 2),
        ]
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let context = UserContext::new("1");

        let filtered = pipeline.apply(candidates(), &context);
        assert_eq!(filtered, candidates());
    }

    #[test]
    fn test_single_filter() {
        let mut context = UserContext::new("1");
        context.rated_movies.insert(MovieId::from(1));

        let pipeline = FilterPipeline::new().add_filter(AlreadyRatedFilter);

        let filtered = pipeline.apply(candidates(), &context);
        let ids: Vec<_> = filtered.iter().map(|c| &c.movie_id).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn test_filters_chain_in_order() {
        let mut context = UserContext::new("1");
        context.rated_movies.insert(MovieId::from(1));

        let pipeline = FilterPipeline::new()
            .add_filter(AlreadyRatedFilter)
            .add_filter(DegenerateVectorFilter);
        assert_eq!(
            pipeline.filter_names(),
            vec!["AlreadyRatedFilter", "DegenerateVectorFilter"]
        );

        let filtered = pipeline.apply(candidates(), &context);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].movie_id, "3");
    }
}
