//! # Data Loader Crate
//!
//! This crate holds the catalog records the recommender consumes and knows
//! how to decode them from the catalog service's JSON payloads.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Genre, Rating, CatalogSnapshot)
//! - **parser**: Decode service payloads, assign rating recency
//! - **index**: Load a snapshot from disk and validate it
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::CatalogSnapshot;
//! use std::path::Path;
//!
//! let snapshot = CatalogSnapshot::load_from_files(Path::new("data/catalog"))?;
//! let movie = snapshot.get_movie("1").unwrap();
//! let ratings = snapshot.get_user_ratings("u1");
//!
//! println!("{} has {} ratings", movie.title, ratings.len());
//! ```

pub mod error;
pub mod index;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use parser::RatingRecord;
pub use types::{
    // Identifiers
    MovieId,
    UserId,
    // Core types
    CatalogSnapshot,
    Genre,
    Movie,
    Rating,
};
