//! Recommendation selection for a single user.
//!
//! This crate provides:
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//! - RecommendationSelector, which turns a ranked candidate list into one
//!   recommended movie or a [`NoRecommendation`] reason
//!
//! ## Architecture
//! A selection runs in stages:
//! 1. The user's two most recent ratings pick the reference movie
//! 2. `sources::SimilarGenreSource` ranks the catalog against it
//! 3. Filters remove candidates that must never be recommended
//! 4. The best remaining candidate wins
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{RecommendationSelector, RecommendedMovie};
//!
//! let selector = RecommendationSelector::new();
//! match selector.select_snapshot(&snapshot, "42") {
//!     Ok(selection) => println!("{:?}", RecommendedMovie::from(&selection)),
//!     Err(reason) => println!("no recommendation: {}", reason),
//! }
//! ```

pub mod filter_pipeline;
pub mod filters;
pub mod outcome;
pub mod selector;
pub mod traits;

// Re-export main types
pub use filter_pipeline::FilterPipeline;
pub use outcome::{DegeneratePolicy, NoRecommendation, RecommendedMovie, Selection};
pub use selector::RecommendationSelector;
pub use traits::Filter;
