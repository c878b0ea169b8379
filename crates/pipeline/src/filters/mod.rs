//! Filter implementations for the candidate pipeline.

pub mod already_rated;
pub mod degenerate_vector;

// Re-export for convenience
pub use already_rated::AlreadyRatedFilter;
pub use degenerate_vector::DegenerateVectorFilter;
