//! Filter to drop candidates whose genre vector is all zeros.
//!
//! Only installed when the selector runs with `DegeneratePolicy::Exclude`.

use crate::traits::Filter;
use sources::{Candidate, UserContext};

pub struct DegenerateVectorFilter;

impl Filter for DegenerateVectorFilter {
    fn name(&self) -> &str {
        "DegenerateVectorFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, _context: &UserContext) -> Vec<Candidate> {
        candidates.into_iter().filter(|c| !c.degenerate).collect()
    }
}
