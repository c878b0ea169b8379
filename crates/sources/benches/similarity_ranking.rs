//! Benchmarks for genre encoding and similarity ranking
//!
//! Run with: cargo bench --package sources
//!
//! Uses a synthetic catalog so the benchmark needs no data files.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::{Genre, Movie, Rating};
use sources::{user_context::build_user_context, GenreEncoder, SimilarGenreSource};

const GENRES: [&str; 18] = [
    "Action", "Adventure", "Animation", "Children", "Comedy", "Crime",
    "Documentary", "Drama", "Fantasy", "Film-Noir", "Horror", "Musical",
    "Mystery", "Romance", "Sci-Fi", "Thriller", "War", "Western",
];

fn synthetic_genres() -> Vec<Genre> {
    GENRES.iter().map(|name| Genre::new(*name)).collect()
}

/// Movie `i` gets up to three genres picked deterministically from its id
fn synthetic_movies(count: i64) -> Vec<Movie> {
    (0..count)
        .map(|id| {
            let n = GENRES.len() as i64;
            let picks = [id % n, (id / 3) % n, (id * 7 + 1) % n];
            let names: Vec<&str> = picks.iter().map(|&p| GENRES[p as usize]).collect();
            Movie::new(id, format!("Movie {}", id), names)
        })
        .collect()
}

fn synthetic_ratings(users: u64, per_user: u64) -> Vec<Rating> {
    let mut ratings = Vec::new();
    let mut sequence = 0;
    for user in 0..users {
        for k in 0..per_user {
            let movie_id = ((user * 31 + k * 17) % 4000) as i64;
            ratings.push(Rating::new(user.to_string(), movie_id, 3.5, sequence));
            sequence += 1;
        }
    }
    ratings
}

fn bench_encode_catalog(c: &mut Criterion) {
    let genres = synthetic_genres();
    let movies = synthetic_movies(4000);
    let encoder = GenreEncoder::from_genres(&genres);

    c.bench_function("encode_catalog_4000", |b| {
        b.iter(|| black_box(encoder.encode_catalog(black_box(&movies))))
    });
}

fn bench_rank_similar(c: &mut Criterion) {
    let genres = synthetic_genres();
    let movies = synthetic_movies(4000);
    let encoder = GenreEncoder::from_genres(&genres);
    let catalog = encoder.encode_catalog(&movies);
    let source = SimilarGenreSource::new();
    let reference = catalog.get("42").expect("movie 42 is in the synthetic catalog");

    c.bench_function("rank_similar_4000", |b| {
        b.iter(|| black_box(source.rank(black_box(reference), &catalog)))
    });
}

fn bench_build_user_context(c: &mut Criterion) {
    let ratings = synthetic_ratings(1000, 50);

    c.bench_function("build_user_context", |b| {
        b.iter(|| black_box(build_user_context(&ratings, black_box("500"))))
    });
}

criterion_group!(
    benches,
    bench_encode_catalog,
    bench_rank_similar,
    bench_build_user_context
);
criterion_main!(benches);
