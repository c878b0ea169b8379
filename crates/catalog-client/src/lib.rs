//! Catalog client for fetching movies, genres and ratings.
//!
//! This crate hides where a [`CatalogSnapshot`] comes from:
//! - [`HttpCatalogClient`] calls the upstream catalog service over HTTP
//! - [`DirectoryCatalog`] reads `movies.json`, `genres.json` and
//!   `ratings.json` from a local directory
//! - [`StaticCatalog`] hands out copies of an in-memory snapshot
//!
//! Every call to [`CatalogSource::fetch_snapshot`] returns a fresh snapshot;
//! nothing is cached between calls.

use async_trait::async_trait;
use data_loader::{CatalogSnapshot, DataLoadError};
use thiserror::Error;

pub mod http;
pub mod local;

pub use http::HttpCatalogClient;
pub use local::{DirectoryCatalog, StaticCatalog};

/// Errors that can occur while fetching a snapshot
#[derive(Error, Debug)]
pub enum CatalogClientError {
    #[error("request to catalog service failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("catalog service returned {status} for {endpoint}: {body}")]
    UnexpectedStatus {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("invalid catalog data: {0}")]
    Load(#[from] DataLoadError),

    #[error("catalog task failed: {0}")]
    Task(String),
}

/// Anything that can produce a catalog snapshot
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Source name for logging and debugging
    fn name(&self) -> &str;

    /// Fetch movies, genres and ratings as one snapshot
    async fn fetch_snapshot(&self) -> Result<CatalogSnapshot, CatalogClientError>;
}
