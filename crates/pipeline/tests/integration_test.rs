//! Integration tests for the pipeline.
//!
//! These tests run the selector over catalog payloads shaped like the ones
//! the upstream catalog service returns.

use data_loader::parser::{parse_genres, parse_movies, parse_ratings};
use data_loader::CatalogSnapshot;
use pipeline::{DegeneratePolicy, NoRecommendation, RecommendationSelector, RecommendedMovie};

const MOVIES: &str = r#"[
    {"id": 1, "titulo": "Mad Max: Fury Road", "videoUrl": "https://v.example/1",
     "generos": [{"nombre": "Action"}, {"nombre": "Adventure"}, {"nombre": "Sci-Fi"}]},
    {"id": 2, "titulo": "The Notebook", "videoUrl": "https://v.example/2",
     "generos": [{"nombre": "Drama"}, {"nombre": "Romance"}]},
    {"id": 3, "titulo": "Dune", "videoUrl": "https://v.example/3",
     "generos": [{"nombre": "Adventure"}, {"nombre": "Sci-Fi"}]},
    {"id": 4, "titulo": "Edge of Tomorrow", "videoUrl": "https://v.example/4",
     "generos": [{"nombre": "Action"}, {"nombre": "Sci-Fi"}]},
    {"id": 5, "titulo": "Notting Hill", "videoUrl": "https://v.example/5",
     "generos": [{"nombre": "Comedy"}, {"nombre": "Romance"}]},
    {"id": 6, "titulo": "Planet Earth", "videoUrl": "https://v.example/6",
     "generos": []}
]"#;

const GENRES: &str = r#"[
    {"nombre": "Action"}, {"nombre": "Adventure"}, {"nombre": "Comedy"},
    {"nombre": "Drama"}, {"nombre": "Romance"}, {"nombre": "Sci-Fi"}
]"#;

const RATINGS: &str = r#"[
    {"usuarioId": 10, "peliculaId": 2, "calificacion": 3},
    {"usuarioId": 10, "peliculaId": 1, "calificacion": 5},
    {"usuarioId": "11", "peliculaId": 5, "calificacion": 4},
    {"usuarioId": "11", "peliculaId": 2, "calificacion": 5},
    {"usuarioId": 12, "peliculaId": 4, "calificacion": 2}
]"#;

fn create_test_snapshot() -> CatalogSnapshot {
    CatalogSnapshot::from_parts(
        parse_movies(MOVIES).unwrap(),
        parse_genres(GENRES).unwrap(),
        parse_ratings(RATINGS).unwrap(),
    )
}

#[test]
fn test_recommends_closest_unrated_movie() {
    let snapshot = create_test_snapshot();
    let selector = RecommendationSelector::new();

    // Reference is Mad Max (latest, 5 >= 3); Edge of Tomorrow and Dune tie
    // on similarity, so the lower id wins
    let selection = selector.select_snapshot(&snapshot, "10").unwrap();
    assert_eq!(selection.reference_movie_id, "1");
    assert_eq!(selection.movie.id, "3");
    assert_eq!(selection.rank, 1);

    let recommended = RecommendedMovie::from(&selection);
    assert_eq!(recommended.title, "Dune");
    assert_eq!(recommended.video_url, "https://v.example/3");
    assert_eq!(recommended.genres.len(), 2);
}

#[test]
fn test_numeric_and_string_user_ids_match() {
    let snapshot = create_test_snapshot();
    let selector = RecommendationSelector::new();

    // User 11: latest is The Notebook (5 >= 4), Notting Hill already rated
    let selection = selector.select_snapshot(&snapshot, "11").unwrap();
    assert_eq!(selection.reference_movie_id, "2");
    assert_ne!(selection.movie.id, "5");
    assert_ne!(selection.movie.id, "2");
}

#[test]
fn test_single_rating_user_gets_no_recommendation() {
    let snapshot = create_test_snapshot();
    let err = RecommendationSelector::new()
        .select_snapshot(&snapshot, "12")
        .unwrap_err();

    assert_eq!(
        err,
        NoRecommendation::InsufficientHistory {
            user_id: "12".to_string(),
            found: 1
        }
    );
}

#[test]
fn test_unknown_user_gets_no_recommendation() {
    let snapshot = create_test_snapshot();
    let err = RecommendationSelector::new()
        .select_snapshot(&snapshot, "404")
        .unwrap_err();
    assert_eq!(err.reason(), "insufficient_history");
}

#[test]
fn test_policies_differ_only_on_untagged_movies() {
    let snapshot = create_test_snapshot();

    // User 11's reference shares nothing with Planet Earth (no genres),
    // Mad Max, Dune or Edge of Tomorrow, so all four tie at 0.0
    let default = RecommendationSelector::new()
        .select_snapshot(&snapshot, "11")
        .unwrap();
    assert_eq!(default.movie.id, "1");

    let excluding = RecommendationSelector::with_policy(DegeneratePolicy::Exclude)
        .select_snapshot(&snapshot, "11")
        .unwrap();
    assert_eq!(excluding.movie.id, "1");

    // A user whose only unrated options are untagged sees the difference
    let mut snapshot = snapshot;
    for (seq, movie_id) in [1, 3, 4].into_iter().enumerate() {
        snapshot.insert_rating(data_loader::Rating::new("11", movie_id, 1.0, 100 + seq as u64));
    }
    // The two latest ratings are now Dune and Edge of Tomorrow with equal
    // scores, so Edge of Tomorrow is the reference and only Planet Earth
    // is left unrated
    let default = RecommendationSelector::new()
        .select_snapshot(&snapshot, "11")
        .unwrap();
    assert_eq!(default.movie.id, "6");
    assert_eq!(default.similarity, 0.0);

    let err = RecommendationSelector::with_policy(DegeneratePolicy::Exclude)
        .select_snapshot(&snapshot, "11")
        .unwrap_err();
    assert_eq!(err.reason(), "no_unrated_candidate");
}
