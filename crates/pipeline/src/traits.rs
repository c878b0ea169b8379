//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a ranked candidate list.

use sources::{Candidate, UserContext};

/// Core trait for filtering candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// Filters take ownership of the ranked `Vec<Candidate>` and must keep the
/// relative order of the candidates they retain.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The ranked candidates to filter (takes ownership)
    /// * `context` - The user's rating history
    fn apply(&self, candidates: Vec<Candidate>, context: &UserContext) -> Vec<Candidate>;
}
