//! Shared types for candidate generation.

use data_loader::{MovieId, Rating, UserId};
use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::Hash;

/// A movie considered for recommendation, with its similarity to the
/// reference movie.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub movie_id: MovieId,
    pub score: f32,
    /// Position of the scored record in the encoded catalog
    pub catalog_index: usize,
    /// 1-based position in the full ranking, before any filter ran.
    /// Zero until the candidate has been ranked.
    pub rank: usize,
    /// The candidate's genre vector has no set slot
    pub degenerate: bool,
}

impl Candidate {
    pub fn new(movie_id: impl Into<MovieId>, score: f32, catalog_index: usize) -> Self {
        Self {
            movie_id: movie_id.into(),
            score,
            catalog_index,
            rank: 0,
            degenerate: false,
        }
    }
}

/// Everything the selector needs to know about one user.
#[derive(Debug, Clone, Default)]
pub struct UserContext {
    pub user_id: UserId,
    /// The user's ratings, oldest first
    pub history: Vec<Rating>,
    /// Every movie the user has rated
    pub rated_movies: HashSet<MovieId>,
}

impl UserContext {
    pub fn new(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Self::default()
        }
    }

    /// The two most recent ratings as `(latest, prior)`
    pub fn latest_pair(&self) -> Option<(&Rating, &Rating)> {
        match self.history.as_slice() {
            [.., prior, latest] => Some((latest, prior)),
            _ => None,
        }
    }

    pub fn has_rated<Q>(&self, movie_id: &Q) -> bool
    where
        MovieId: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.rated_movies.contains(movie_id)
    }
}
