//! One-hot genre encoding.
//!
//! Every movie becomes a vector with one slot per distinct genre name in
//! the vocabulary. The slot is 1.0 when the movie lists that genre.
//!
//! ## Algorithm
//! 1. Build the vocabulary index once per call: distinct names in
//!    first-seen order
//! 2. For each movie, set the slot of each of its genres that the
//!    vocabulary knows; unknown names are ignored
//! 3. Return new records; the input movies are left untouched

use data_loader::{Genre, Movie, MovieId};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Mapping from genre name to a stable vector position
#[derive(Debug, Clone, Default)]
pub struct GenreVocabulary {
    positions: HashMap<String, usize>,
    names: Vec<String>,
}

impl GenreVocabulary {
    /// Build the index from the genre collection.
    ///
    /// A name seen twice keeps the position of its first occurrence, so the
    /// vector length is the number of distinct names.
    pub fn from_genres(genres: &[Genre]) -> Self {
        let mut vocabulary = Self::default();
        for genre in genres {
            if !vocabulary.positions.contains_key(&genre.name) {
                vocabulary
                    .positions
                    .insert(genre.name.clone(), vocabulary.names.len());
                vocabulary.names.push(genre.name.clone());
            }
        }
        vocabulary
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Position of a genre name, if the vocabulary knows it
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }
}

/// A movie's one-hot genre encoding
#[derive(Debug, Clone, PartialEq)]
pub struct GenreVector(Vec<f32>);

impl GenreVector {
    pub fn zeros(len: usize) -> Self {
        Self(vec![0.0; len])
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when no slot is set, which leaves cosine similarity undefined
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&v| v == 0.0)
    }

    fn set(&mut self, position: usize) {
        self.0[position] = 1.0;
    }
}

impl From<Vec<f32>> for GenreVector {
    fn from(values: Vec<f32>) -> Self {
        Self(values)
    }
}

/// A movie paired with its encoding
#[derive(Debug, Clone)]
pub struct EncodedMovie<'a> {
    pub movie: &'a Movie,
    pub vector: GenreVector,
}

impl EncodedMovie<'_> {
    pub fn id(&self) -> &MovieId {
        &self.movie.id
    }
}

/// All movies of one snapshot, encoded against the same vocabulary.
///
/// Every input record keeps its own slot, duplicated ids included.
#[derive(Debug, Clone, Default)]
pub struct EncodedCatalog<'a> {
    movies: Vec<EncodedMovie<'a>>,
    positions: HashMap<MovieId, usize>,
    dimension: usize,
}

impl<'a> EncodedCatalog<'a> {
    /// Look up an encoded movie by id (first occurrence of a duplicated id)
    pub fn get<Q>(&self, id: &Q) -> Option<&EncodedMovie<'a>>
    where
        MovieId: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.get(id).map(|&pos| &self.movies[pos])
    }

    /// The encoded movie at a catalog position
    pub fn at(&self, index: usize) -> Option<&EncodedMovie<'a>> {
        self.movies.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EncodedMovie<'a>> {
        self.movies.iter()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Length of every vector in this catalog
    pub fn dimension(&self) -> usize {
        self.dimension
    }
}

/// Encodes movies against a fixed genre vocabulary
#[derive(Debug, Clone)]
pub struct GenreEncoder {
    vocabulary: GenreVocabulary,
}

impl GenreEncoder {
    pub fn new(vocabulary: GenreVocabulary) -> Self {
        Self { vocabulary }
    }

    /// Build the vocabulary from the genre collection and wrap it
    pub fn from_genres(genres: &[Genre]) -> Self {
        Self::new(GenreVocabulary::from_genres(genres))
    }

    /// Encode a single movie
    pub fn encode_movie(&self, movie: &Movie) -> GenreVector {
        let mut vector = GenreVector::zeros(self.vocabulary.len());
        for genre in &movie.genres {
            if let Some(position) = self.vocabulary.position(&genre.name) {
                vector.set(position);
            }
        }
        vector
    }

    /// Encode every movie of a snapshot
    pub fn encode_catalog<'a>(&self, movies: &'a [Movie]) -> EncodedCatalog<'a> {
        let mut catalog = EncodedCatalog {
            movies: Vec::with_capacity(movies.len()),
            positions: HashMap::with_capacity(movies.len()),
            dimension: self.vocabulary.len(),
        };

        for movie in movies {
            catalog
                .positions
                .entry(movie.id.clone())
                .or_insert(catalog.movies.len());
            catalog.movies.push(EncodedMovie {
                movie,
                vector: self.encode_movie(movie),
            });
        }

        catalog
    }
}
