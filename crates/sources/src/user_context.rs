//! Helper functions to build UserContext from a rating collection
//!
//! This module gathers one user's ratings into a UserContext so the
//! selector queries the rating collection only once.

use crate::types::UserContext;
use data_loader::Rating;

/// Build a UserContext for a given user
///
/// - History: the user's ratings ordered by `sequence`, oldest first.
///   The sort is stable, so equal sequences keep collection order.
/// - Rated movies: every movie id the user has rated
pub fn build_user_context(ratings: &[Rating], user_id: &str) -> UserContext {
    let mut context = UserContext::new(user_id);

    context.history = ratings
        .iter()
        .filter(|r| r.user_id == user_id)
        .cloned()
        .collect();
    context.history.sort_by_key(|r| r.sequence);

    context.rated_movies = context
        .history
        .iter()
        .map(|r| r.movie_id.clone())
        .collect();
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratings() -> Vec<Rating> {
        vec![
            Rating::new("u1", 1, 5.0, 0),
            Rating::new("u2", 2, 3.0, 1),
            Rating::new("u1", 2, 3.0, 2),
            Rating::new("u1", 3, 4.5, 3),
        ]
    }

    #[test]
    fn test_build_user_context_basic() {
        let context = build_user_context(&ratings(), "u1");

        assert_eq!(context.user_id, "u1");
        assert_eq!(context.history.len(), 3);
        assert_eq!(context.rated_movies.len(), 3);
        assert!(context.has_rated("1"));
        assert!(context.has_rated("2"));
        assert!(context.has_rated("3"));
        assert!(!context.has_rated("4"));
    }

    #[test]
    fn test_latest_pair() {
        let context = build_user_context(&ratings(), "u1");
        let (latest, prior) = context.latest_pair().unwrap();
        assert_eq!(latest.movie_id, "3");
        assert_eq!(prior.movie_id, "2");
    }

    #[test]
    fn test_history_sorted_by_sequence_not_slice_order() {
        let shuffled = vec![
            Rating::new("u1", 30, 2.0, 9),
            Rating::new("u1", 10, 4.0, 1),
            Rating::new("u1", 20, 5.0, 4),
        ];
        let context = build_user_context(&shuffled, "u1");
        let order: Vec<_> = context.history.iter().map(|r| &r.movie_id).collect();
        assert_eq!(order, vec!["10", "20", "30"]);

        let (latest, prior) = context.latest_pair().unwrap();
        assert_eq!(latest.movie_id, "30");
        assert_eq!(prior.movie_id, "20");
    }

    #[test]
    fn test_user_with_one_rating_has_no_pair() {
        let context = build_user_context(&[Rating::new("u1", 1, 5.0, 0)], "u1");
        assert_eq!(context.history.len(), 1);
        assert!(context.latest_pair().is_none());
    }

    #[test]
    fn test_unknown_user() {
        let context = build_user_context(&ratings(), "nobody");
        assert!(context.history.is_empty());
        assert!(context.rated_movies.is_empty());
        assert!(context.latest_pair().is_none());
    }
}
