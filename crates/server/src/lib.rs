//! HTTP service recommending one movie per user by genre similarity.
//!
//! The service exposes `GET /recomendar/:user_id`. Each request fetches a
//! fresh catalog snapshot through a [`catalog_client::CatalogSource`] and
//! runs the selector on it; nothing is cached between requests.

pub mod api;
pub mod config;
pub mod error;
pub mod orchestrator;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use orchestrator::RecommendationOrchestrator;
