//! Load a catalog snapshot directory and print what it holds.
//!
//! Run with: cargo run --package data-loader --example load_catalog -- data/catalog

use data_loader::CatalogSnapshot;
use std::path::PathBuf;
use std::time::Instant;

fn main() {
    let data_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/catalog"));

    println!("Loading catalog snapshot from {}...\n", data_dir.display());

    let start = Instant::now();
    let snapshot = CatalogSnapshot::load_from_files(&data_dir).expect("Failed to load catalog");
    let elapsed = start.elapsed();

    let (movies, genres, ratings) = snapshot.counts();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", movies);
    println!("Genres: {}", genres);
    println!("Ratings: {}", ratings);

    let missing = snapshot.missing_collections();
    if !missing.is_empty() {
        println!("\nEmpty collections: {}", missing.join(", "));
    }
}
