//! CatalogSnapshot loading and validation.
//!
//! A snapshot directory holds the three payloads the catalog service would
//! return, saved as `movies.json`, `genres.json` and `ratings.json`.

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

impl CatalogSnapshot {
    /// Load a snapshot from a directory of JSON payloads.
    ///
    /// Steps:
    /// 1. Read and parse all three files in parallel
    /// 2. Build the snapshot (movie lookup, per-user rating index)
    /// 3. Validate it
    pub fn load_from_files(data_dir: &Path) -> Result<Self> {
        debug!("Loading catalog snapshot from {:?}", data_dir);

        let movies_path = data_dir.join("movies.json");
        let genres_path = data_dir.join("genres.json");
        let ratings_path = data_dir.join("ratings.json");

        let ((movies, genres), ratings) = rayon::join(
            || {
                rayon::join(
                    || parser::read_json_file(&movies_path).and_then(|s| parser::parse_movies(&s)),
                    || parser::read_json_file(&genres_path).and_then(|s| parser::parse_genres(&s)),
                )
            },
            || parser::read_json_file(&ratings_path).and_then(|s| parser::parse_ratings(&s)),
        );

        let snapshot = Self::from_parts(movies?, genres?, ratings?);
        snapshot.validate()?;

        let (movies, genres, ratings) = snapshot.counts();
        debug!(
            "Loaded {} movies, {} genres, {} ratings",
            movies, genres, ratings
        );
        Ok(snapshot)
    }

    /// Validate data integrity
    ///
    /// Scores must be finite. Duplicate movie ids and ratings that point at
    /// unknown movies are tolerated (the selector reports the latter per
    /// user) but logged.
    pub fn validate(&self) -> Result<()> {
        if let Some(bad) = self.ratings.iter().find(|r| !r.score.is_finite()) {
            return Err(DataLoadError::InvalidValue {
                field: "score".to_string(),
                value: bad.score.to_string(),
            });
        }

        if self.movie_positions.len() != self.movies.len() {
            warn!(
                duplicates = self.movies.len() - self.movie_positions.len(),
                "Catalog contains duplicate movie ids; the first occurrence wins"
            );
        }

        let dangling: HashSet<&MovieId> = self
            .ratings
            .iter()
            .map(|r| &r.movie_id)
            .filter(|id| !self.movie_positions.contains_key(*id))
            .collect();
        if !dangling.is_empty() {
            warn!(count = dangling.len(), "Ratings reference unknown movie ids");
        }

        Ok(())
    }
}
