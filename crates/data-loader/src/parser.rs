//! Parser for catalog service payloads.
//!
//! The catalog service returns three JSON arrays:
//! - movies:  `[{id, titulo|title, videoUrl, generos|genres: [{nombre|name}]}]`
//! - genres:  `[{nombre|name}]`
//! - ratings: `[{usuarioId|userId, peliculaId|movieId, calificacion|score}]`
//!
//! Ratings arrive in creation order. That order is turned into an explicit
//! `sequence` on each [`Rating`] so later stages never depend on slice order.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;

/// A rating exactly as the catalog service sends it
#[derive(Debug, Clone, Deserialize)]
pub struct RatingRecord {
    #[serde(
        rename = "userId",
        alias = "usuarioId",
        deserialize_with = "user_id_from_string_or_number"
    )]
    pub user_id: UserId,
    #[serde(rename = "movieId", alias = "peliculaId")]
    pub movie_id: MovieId,
    #[serde(alias = "calificacion")]
    pub score: f32,
    /// Creation time, when the service provides one
    #[serde(default)]
    pub timestamp: Option<i64>,
}

/// Accept user ids encoded either as JSON strings or numbers
fn user_id_from_string_or_number<'de, D>(deserializer: D) -> std::result::Result<UserId, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(UserId::from)
}

/// Read a whole file into a string, mapping a missing file to `FileNotFound`
pub fn read_json_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    Ok(fs::read_to_string(path)?)
}

fn parse_array<'a, T: Deserialize<'a>>(json: &'a str, origin: &str) -> Result<Vec<T>> {
    serde_json::from_str(json).map_err(|e| DataLoadError::ParseError {
        origin: origin.to_string(),
        reason: e.to_string(),
    })
}

/// Parse the movies payload
pub fn parse_movies(json: &str) -> Result<Vec<Movie>> {
    parse_array(json, "movies")
}

/// Parse the genres payload
pub fn parse_genres(json: &str) -> Result<Vec<Genre>> {
    parse_array(json, "genres")
}

/// Parse the ratings payload and assign recency sequence numbers
pub fn parse_ratings(json: &str) -> Result<Vec<Rating>> {
    let records: Vec<RatingRecord> = parse_array(json, "ratings")?;
    sequence_ratings(records)
}

/// Turn wire records into ratings with an explicit recency order.
///
/// If every record carries a timestamp the records are ordered by it
/// (stable, so equal timestamps keep arrival order). Otherwise arrival
/// order is the recency order. Scores must be finite.
pub fn sequence_ratings(mut records: Vec<RatingRecord>) -> Result<Vec<Rating>> {
    if let Some(bad) = records.iter().find(|r| !r.score.is_finite()) {
        return Err(DataLoadError::InvalidValue {
            field: "score".to_string(),
            value: bad.score.to_string(),
        });
    }

    if !records.is_empty() && records.iter().all(|r| r.timestamp.is_some()) {
        records.sort_by_key(|r| r.timestamp);
    }

    Ok(records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| Rating {
            user_id: record.user_id,
            movie_id: record.movie_id,
            score: record.score,
            sequence: idx as u64,
        })
        .collect())
}
