//! Core domain types for the movie catalog.
//!
//! This module defines the records the recommender works on:
//! - Identifiers (UserId, MovieId)
//! - Movie, Genre and Rating as delivered by the catalog service
//! - CatalogSnapshot, the per-request in-memory view over all three

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

// =============================================================================
// Identifiers
// =============================================================================

/// Identifier of a user. The catalog service may send it as a string or a
/// number; it is always normalised to a string.
pub type UserId = String;

/// An identifier the catalog service encodes as a JSON string or number
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

/// Identifier of a movie.
///
/// Held as text so `5` and `"5"` name the same movie. Serialized back as a
/// JSON number whenever the text is a plain integer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MovieId(String);

impl MovieId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The id as an integer, if it is written as one (no sign or padding tricks)
    pub fn as_number(&self) -> Option<i64> {
        self.0
            .parse::<i64>()
            .ok()
            .filter(|n| n.to_string() == self.0)
    }
}

/// Integer ids first in numeric order, then the rest by text
impl Ord for MovieId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for MovieId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for MovieId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for MovieId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for MovieId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<i64> for MovieId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<i32> for MovieId {
    fn from(id: i32) -> Self {
        Self(id.to_string())
    }
}

impl Borrow<str> for MovieId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for MovieId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for MovieId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for MovieId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_number() {
            Some(n) => serializer.serialize_i64(n),
            None => serializer.serialize_str(&self.0),
        }
    }
}

impl<'de> Deserialize<'de> for MovieId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawId::deserialize(deserializer).map(|raw| Self(raw.into()))
    }
}

// =============================================================================
// Movie-related Types
// =============================================================================

/// A genre from the global vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genre {
    #[serde(alias = "nombre")]
    pub name: String,
}

impl Genre {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Represents a movie in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    #[serde(alias = "titulo")]
    pub title: String,
    #[serde(rename = "videoUrl", default)]
    pub video_url: String,
    /// Genres in the order the catalog lists them
    #[serde(alias = "generos", default)]
    pub genres: Vec<Genre>,
}

impl Movie {
    /// Build a movie from genre names (mostly useful for fixtures)
    pub fn new<I, S>(id: impl Into<MovieId>, title: impl Into<String>, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            title: title.into(),
            video_url: String::new(),
            genres: genres.into_iter().map(Genre::new).collect(),
        }
    }

    /// Returns true if any of this movie's genres has the given name
    pub fn has_genre(&self, name: &str) -> bool {
        self.genres.iter().any(|g| g.name == name)
    }
}

// =============================================================================
// Rating Type
// =============================================================================

/// A single rating from a user for a movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub score: f32,
    /// Monotonic recency key assigned at ingestion. Higher is more recent.
    pub sequence: u64,
}

impl Rating {
    pub fn new(
        user_id: impl Into<UserId>,
        movie_id: impl Into<MovieId>,
        score: f32,
        sequence: u64,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            movie_id: movie_id.into(),
            score,
            sequence,
        }
    }
}

// =============================================================================
// CatalogSnapshot - one request's view of the catalog
// =============================================================================

/// Movies, genres and ratings fetched for a single recommendation call.
///
/// A snapshot is built fresh for every request and never shared between
/// requests. Movie lookups resolve to the first movie carrying an id.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub(crate) movies: Vec<Movie>,
    pub(crate) movie_positions: HashMap<MovieId, usize>,
    pub(crate) genres: Vec<Genre>,
    pub(crate) ratings: Vec<Rating>,
    /// All ratings made by each user, in insertion order
    pub(crate) user_ratings: HashMap<UserId, Vec<Rating>>,
}

impl CatalogSnapshot {
    /// Creates a new, empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from already-parsed collections
    pub fn from_parts(movies: Vec<Movie>, genres: Vec<Genre>, ratings: Vec<Rating>) -> Self {
        let mut snapshot = Self::new();
        for movie in movies {
            snapshot.insert_movie(movie);
        }
        snapshot.genres = genres;
        for rating in ratings {
            snapshot.insert_rating(rating);
        }
        snapshot
    }

    /// Get a movie by ID
    pub fn get_movie<Q>(&self, id: &Q) -> Option<&Movie>
    where
        MovieId: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.movie_positions.get(id).map(|&pos| &self.movies[pos])
    }

    /// All movies in catalog order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// The genre vocabulary in catalog order
    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    /// All ratings in insertion order
    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    /// Get all ratings made by a user
    ///
    /// Returns an empty slice if the user has no ratings
    pub fn get_user_ratings(&self, user_id: &str) -> &[Rating] {
        self.user_ratings
            .get(user_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Insert a movie. A duplicate id keeps resolving to the first movie.
    pub fn insert_movie(&mut self, movie: Movie) {
        self.movie_positions
            .entry(movie.id.clone())
            .or_insert(self.movies.len());
        self.movies.push(movie);
    }

    /// Insert a rating and update the per-user index
    pub fn insert_rating(&mut self, rating: Rating) {
        self.user_ratings
            .entry(rating.user_id.clone())
            .or_default()
            .push(rating.clone());
        self.ratings.push(rating);
    }

    /// Names of the collections that are empty.
    ///
    /// The catalog service reports "no data" as an empty collection, so a
    /// non-empty result means the snapshot cannot be used.
    pub fn missing_collections(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.movies.is_empty() {
            missing.push("movies");
        }
        if self.genres.is_empty() {
            missing.push("genres");
        }
        if self.ratings.is_empty() {
            missing.push("ratings");
        }
        missing
    }

    /// Get counts for debugging/validation
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.movies.len(), self.genres.len(), self.ratings.len())
    }
}
