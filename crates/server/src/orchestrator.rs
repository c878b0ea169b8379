//! # Recommendation Orchestrator
//!
//! Coordinates one recommendation request:
//! 1. Fetch a fresh catalog snapshot
//! 2. Reject snapshots with an empty collection
//! 3. Run the selector on a blocking thread
//! 4. Log timing for each stage

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, instrument, warn};

use catalog_client::CatalogSource;
use data_loader::CatalogSnapshot;
use pipeline::{NoRecommendation, RecommendationSelector, Selection};

use crate::error::{ApiError, ApiResult};

/// Main orchestrator that coordinates the recommendation flow
#[derive(Clone)]
pub struct RecommendationOrchestrator {
    catalog: Arc<dyn CatalogSource>,
    selector: Arc<RecommendationSelector>,
}

impl RecommendationOrchestrator {
    pub fn new(catalog: Arc<dyn CatalogSource>, selector: RecommendationSelector) -> Self {
        Self {
            catalog,
            selector: Arc::new(selector),
        }
    }

    /// Main entry point: pick one movie for a user
    #[instrument(skip(self), fields(source = self.catalog.name()))]
    pub async fn recommend(&self, user_id: &str) -> ApiResult<Selection> {
        let start_time = Instant::now();

        let snapshot = self.fetch_snapshot().await?;
        let fetched = start_time.elapsed();

        let selection = self.select(snapshot, user_id).await;

        info!(
            "Recommendation for user {} finished in {:.2?} (fetch {:.2?})",
            user_id,
            start_time.elapsed(),
            fetched
        );

        let selection = selection?;
        info!(
            "Recommended movie {} to user {} (reference {}, similarity {:.4})",
            selection.movie.id, user_id, selection.reference_movie_id, selection.similarity
        );
        Ok(selection)
    }

    /// Fetch a snapshot and make sure every collection has data
    async fn fetch_snapshot(&self) -> Result<CatalogSnapshot, NoRecommendation> {
        let snapshot = self.catalog.fetch_snapshot().await.map_err(|e| {
            warn!("Failed to fetch catalog snapshot: {}", e);
            NoRecommendation::DataUnavailable(e.to_string())
        })?;

        let missing = snapshot.missing_collections();
        if !missing.is_empty() {
            warn!("Catalog snapshot has empty collections: {:?}", missing);
            return Err(NoRecommendation::DataUnavailable(format!(
                "no data for {}",
                missing.join(", ")
            )));
        }

        let (movies, genres, ratings) = snapshot.counts();
        info!(
            "Fetched snapshot: {} movies, {} genres, {} ratings",
            movies, genres, ratings
        );
        Ok(snapshot)
    }

    /// Run the CPU-bound selection off the async runtime
    async fn select(&self, snapshot: CatalogSnapshot, user_id: &str) -> ApiResult<Selection> {
        let selector = self.selector.clone();
        let user_id = user_id.to_string();

        let outcome = tokio::task::spawn_blocking(move || {
            selector.select_snapshot(&snapshot, &user_id)
        })
        .await
        .map_err(|e| ApiError::Internal(format!("selection task failed: {}", e)))?;

        outcome.map_err(|reason| {
            info!("No recommendation: {}", reason);
            ApiError::from(reason)
        })
    }
}
