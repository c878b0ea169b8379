use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use catalog_client::{CatalogSource, DirectoryCatalog, HttpCatalogClient};
use data_loader::{CatalogSnapshot, Genre, MovieId, UserId};
use pipeline::{DegeneratePolicy, RecommendationSelector, RecommendedMovie, Selection};
use server::{ApiError, RecommendationOrchestrator};
use sources::{GenreEncoder, SimilarGenreSource};

/// genre-recs - genre similarity movie recommender
#[derive(Parser)]
#[command(name = "genre-recs")]
#[command(about = "Recommend a movie from the genres of a user's latest ratings", long_about = None)]
struct Cli {
    /// Directory holding movies.json, genres.json and ratings.json
    #[arg(short, long, conflicts_with = "upstream")]
    data_dir: Option<PathBuf>,

    /// Base URL of the catalog service (e.g. http://localhost:5283)
    #[arg(short, long)]
    upstream: Option<String>,

    /// How movies without any known genre are ranked: score_zero or exclude
    #[arg(long, default_value_t = DegeneratePolicy::ScoreZero)]
    degenerate_policy: DegeneratePolicy,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend one movie for a user
    Recommend {
        /// User ID to recommend for
        #[arg(long)]
        user_id: UserId,

        /// Show the reference movie, similarity and rank
        #[arg(long)]
        explain: bool,
    },

    /// Show a user's ratings, oldest first
    History {
        /// User ID to display
        #[arg(long)]
        user_id: UserId,
    },

    /// Rank the catalog by genre similarity to one movie
    Similar {
        /// Movie to compare against
        #[arg(long)]
        movie_id: MovieId,

        /// Number of movies to show
        #[arg(long, default_value = "10")]
        limit: usize,
    },
}

const DEFAULT_DATA_DIR: &str = "data/catalog";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let catalog = build_catalog(&cli)?;

    match cli.command {
        Commands::Recommend { user_id, explain } => {
            handle_recommend(catalog, cli.degenerate_policy, user_id, explain).await?
        }
        Commands::History { user_id } => {
            let snapshot = load_snapshot(catalog.as_ref()).await?;
            handle_history(&snapshot, &user_id)
        }
        Commands::Similar { movie_id, limit } => {
            let snapshot = load_snapshot(catalog.as_ref()).await?;
            handle_similar(&snapshot, &movie_id, limit)?
        }
    }

    Ok(())
}

/// Pick the catalog source from the command-line flags
fn build_catalog(cli: &Cli) -> Result<Arc<dyn CatalogSource>> {
    if let Some(url) = &cli.upstream {
        debug!("Using catalog service at {}", url);
        let client = HttpCatalogClient::new(url.as_str()).context("Failed to build catalog client")?;
        return Ok(Arc::new(client));
    }

    let dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
    debug!("Using catalog directory {}", dir.display());
    Ok(Arc::new(DirectoryCatalog::new(dir)))
}

async fn load_snapshot(catalog: &dyn CatalogSource) -> Result<CatalogSnapshot> {
    let start = Instant::now();
    let snapshot = catalog
        .fetch_snapshot()
        .await
        .with_context(|| format!("Failed to load catalog from {} source", catalog.name()))?;

    let (movies, genres, ratings) = snapshot.counts();
    println!(
        "{} Loaded {} movies, {} genres, {} ratings in {:?}",
        "✓".green(),
        movies,
        genres,
        ratings,
        start.elapsed()
    );
    Ok(snapshot)
}

/// Handle the 'recommend' command
async fn handle_recommend(
    catalog: Arc<dyn CatalogSource>,
    policy: DegeneratePolicy,
    user_id: UserId,
    explain: bool,
) -> Result<()> {
    let orchestrator =
        RecommendationOrchestrator::new(catalog, RecommendationSelector::with_policy(policy));

    let start = Instant::now();
    match orchestrator.recommend(&user_id).await {
        Ok(selection) => {
            print_recommendation(&user_id, &selection, explain);
            if explain {
                println!("   Took {:?}", start.elapsed());
            }
            Ok(())
        }
        Err(ApiError::NoRecommendation(reason)) => {
            println!(
                "{} No recommendation for user {}: {} ({})",
                "✗".yellow(),
                user_id,
                reason,
                reason.reason().dimmed()
            );
            Ok(())
        }
        Err(other) => Err(anyhow!(other)),
    }
}

/// Handle the 'history' command
fn handle_history(snapshot: &CatalogSnapshot, user_id: &str) {
    let mut ratings: Vec<_> = snapshot.get_user_ratings(user_id).iter().collect();
    ratings.sort_by_key(|r| r.sequence);

    println!("{}", format!("Ratings of user {}:", user_id).bold().blue());
    if ratings.is_empty() {
        println!("  (none)");
        return;
    }

    for (i, rating) in ratings.iter().enumerate() {
        let title = snapshot
            .get_movie(&rating.movie_id)
            .map(|m| m.title.as_str())
            .unwrap_or("<not in catalog>");
        println!(
            "{:>3}. {} {} - {:.1}",
            (i + 1).to_string().green(),
            title,
            format!("(#{})", rating.movie_id).dimmed(),
            rating.score
        );
    }

    if ratings.len() < 2 {
        println!(
            "{} At least 2 ratings are needed for a recommendation",
            "•".yellow()
        );
    }
}

/// Handle the 'similar' command
fn handle_similar(snapshot: &CatalogSnapshot, movie_id: &MovieId, limit: usize) -> Result<()> {
    if snapshot.genres().is_empty() {
        bail!("The catalog has no genres to compare with");
    }

    let encoder = GenreEncoder::from_genres(snapshot.genres());
    let catalog = encoder.encode_catalog(snapshot.movies());
    let reference = catalog
        .get(movie_id)
        .ok_or_else(|| anyhow!("Movie {} not found", movie_id))?;

    println!(
        "{}",
        format!(
            "Most similar to {} [{}]:",
            reference.movie.title,
            format_genres(&reference.movie.genres)
        )
        .bold()
        .blue()
    );
    if reference.vector.is_zero() {
        println!(
            "{} This movie has no genre from the vocabulary; every score is 0",
            "•".yellow()
        );
    }

    let ranked = SimilarGenreSource::new().rank(reference, &catalog);
    for (i, candidate) in ranked.iter().take(limit).enumerate() {
        let Some(encoded) = catalog.at(candidate.catalog_index) else {
            continue;
        };
        println!(
            "{:>3}. {} [{}] - similarity {:.3}",
            (i + 1).to_string().green(),
            encoded.movie.title,
            format_genres(&encoded.movie.genres),
            candidate.score
        );
    }
    Ok(())
}

/// Helper function to format and print the recommendation
fn print_recommendation(user_id: &str, selection: &Selection, explain: bool) {
    let movie = RecommendedMovie::from(selection);
    println!("{}", format!("Recommendation for user {}:", user_id).bold().blue());
    println!(
        "{} {} [{}]",
        format!("#{}", movie.id).green(),
        movie.title.bold(),
        format_genres(&movie.genres)
    );
    if !movie.video_url.is_empty() {
        println!("   {}", movie.video_url.dimmed());
    }

    if explain {
        println!(
            "   Reference movie: #{}, similarity {:.3}, rank {}",
            selection.reference_movie_id, selection.similarity, selection.rank
        );
    }
}

fn format_genres(genres: &[Genre]) -> String {
    genres
        .iter()
        .map(|g| g.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
