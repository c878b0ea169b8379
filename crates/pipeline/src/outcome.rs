//! What a recommendation call produces.
//!
//! Either a [`Selection`] (projected to [`RecommendedMovie`] for callers)
//! or a [`NoRecommendation`] explaining why nothing could be chosen.

use data_loader::{Genre, Movie, MovieId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Reasons a user gets no recommendation.
///
/// These are ordinary outcomes, not failures of the recommender.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NoRecommendation {
    #[error("user {user_id} has {found} rating(s), at least 2 are needed")]
    InsufficientHistory { user_id: UserId, found: usize },

    #[error("rated movie {movie_id} is not in the catalog")]
    MovieNotFound { movie_id: MovieId },

    #[error("every candidate movie has already been rated by user {user_id}")]
    NoUnratedCandidate { user_id: UserId },

    #[error("reference movie {movie_id} has no genre in the vocabulary")]
    DegenerateVector { movie_id: MovieId },

    #[error("catalog data unavailable: {0}")]
    DataUnavailable(String),
}

impl NoRecommendation {
    /// Stable machine-readable code
    pub fn reason(&self) -> &'static str {
        match self {
            NoRecommendation::InsufficientHistory { .. } => "insufficient_history",
            NoRecommendation::MovieNotFound { .. } => "movie_not_found",
            NoRecommendation::NoUnratedCandidate { .. } => "no_unrated_candidate",
            NoRecommendation::DegenerateVector { .. } => "degenerate_vector",
            NoRecommendation::DataUnavailable(_) => "data_unavailable",
        }
    }
}

/// The chosen movie plus how it was chosen
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub movie: Movie,
    /// The rated movie the catalog was compared against
    pub reference_movie_id: MovieId,
    pub similarity: f32,
    /// 1-based position in the similarity ranking before filtering
    pub rank: usize,
}

/// Public projection of the recommended movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedMovie {
    pub id: MovieId,
    pub title: String,
    #[serde(rename = "videoUrl")]
    pub video_url: String,
    pub genres: Vec<Genre>,
}

impl From<&Movie> for RecommendedMovie {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id.clone(),
            title: movie.title.clone(),
            video_url: movie.video_url.clone(),
            genres: movie.genres.clone(),
        }
    }
}

impl From<&Selection> for RecommendedMovie {
    fn from(selection: &Selection) -> Self {
        Self::from(&selection.movie)
    }
}

/// How candidates with an all-zero genre vector are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Keep them, scored 0.0
    #[default]
    ScoreZero,
    /// Drop them before selection
    Exclude,
}

impl fmt::Display for DegeneratePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegeneratePolicy::ScoreZero => write!(f, "score_zero"),
            DegeneratePolicy::Exclude => write!(f, "exclude"),
        }
    }
}

impl FromStr for DegeneratePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "score_zero" => Ok(DegeneratePolicy::ScoreZero),
            "exclude" => Ok(DegeneratePolicy::Exclude),
            other => Err(format!(
                "unknown degenerate policy '{}', expected score_zero or exclude",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_codes() {
        let cases = [
            (
                NoRecommendation::InsufficientHistory {
                    user_id: "1".into(),
                    found: 1,
                },
                "insufficient_history",
            ),
            (
                NoRecommendation::MovieNotFound { movie_id: 9.into() },
                "movie_not_found",
            ),
            (
                NoRecommendation::NoUnratedCandidate { user_id: "1".into() },
                "no_unrated_candidate",
            ),
            (
                NoRecommendation::DegenerateVector { movie_id: "m3".into() },
                "degenerate_vector",
            ),
            (
                NoRecommendation::DataUnavailable("movies".into()),
                "data_unavailable",
            ),
        ];

        for (outcome, code) in cases {
            assert_eq!(outcome.reason(), code);
        }
    }

    #[test]
    fn test_recommended_movie_wire_shape() {
        let mut movie = Movie::new(7, "Alien", ["Horror", "Sci-Fi"]);
        movie.video_url = "https://videos.example/alien".to_string();

        let json = serde_json::to_value(RecommendedMovie::from(&movie)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "title": "Alien",
                "videoUrl": "https://videos.example/alien",
                "genres": [{"name": "Horror"}, {"name": "Sci-Fi"}]
            })
        );
    }

    #[test]
    fn test_degenerate_policy_parsing() {
        assert_eq!(DegeneratePolicy::default(), DegeneratePolicy::ScoreZero);
        assert_eq!("exclude".parse::<DegeneratePolicy>(), Ok(DegeneratePolicy::Exclude));
        assert_eq!(
            " SCORE_ZERO ".parse::<DegeneratePolicy>(),
            Ok(DegeneratePolicy::ScoreZero)
        );
        assert!("drop".parse::<DegeneratePolicy>().is_err());

        let parsed: DegeneratePolicy = serde_json::from_str("\"exclude\"").unwrap();
        assert_eq!(parsed, DegeneratePolicy::Exclude);
        assert_eq!(DegeneratePolicy::Exclude.to_string(), "exclude");
    }
}
