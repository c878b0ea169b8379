//! # Sources Crate
//!
//! Candidate generation for genre-based recommendations.
//!
//! ## Components
//!
//! ### Genre encoding
//! Every movie becomes a one-hot vector over the genre vocabulary
//! ([`GenreEncoder`]). Encoding never mutates the catalog records.
//!
//! ### Similarity
//! [`CosineSimilarity`] compares two encoded movies. Zero-magnitude
//! vectors score 0.0 rather than NaN.
//!
//! ### Similar-genre source
//! [`SimilarGenreSource`] ranks the whole catalog against a reference
//! movie, most similar first, ties broken by movie id.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{user_context::build_user_context, GenreEncoder, SimilarGenreSource};
//!
//! let encoder = GenreEncoder::from_genres(snapshot.genres());
//! let catalog = encoder.encode_catalog(snapshot.movies());
//! let context = build_user_context(snapshot.ratings(), "42");
//!
//! let (latest, prior) = context.latest_pair().unwrap();
//! let reference = catalog.get(&prior.movie_id).unwrap();
//! let ranked = SimilarGenreSource::new().rank(reference, &catalog);
//! ```

pub mod encoder;
pub mod similar_genres;
pub mod similarity;
pub mod types;
pub mod user_context;

// Re-export commonly used types
pub use encoder::{EncodedCatalog, EncodedMovie, GenreEncoder, GenreVector, GenreVocabulary};
pub use similar_genres::SimilarGenreSource;
pub use similarity::{cosine_similarity, CosineSimilarity, SimilarityScorer};
pub use types::{Candidate, UserContext};
