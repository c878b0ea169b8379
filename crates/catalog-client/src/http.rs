//! HTTP client for the upstream catalog service.
//!
//! The service exposes one endpoint per collection, each returning a JSON
//! array. The three collections are fetched concurrently.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use data_loader::parser::{parse_genres, parse_movies, parse_ratings};
use data_loader::CatalogSnapshot;

use crate::{CatalogClientError, CatalogSource};

pub const MOVIES_PATH: &str = "/api/pelicula";
pub const GENRES_PATH: &str = "/api/genero";
pub const RATINGS_PATH: &str = "/api/rating";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches snapshots from the catalog service
#[derive(Clone)]
pub struct HttpCatalogClient {
    http: Client,
    base_url: String,
}

impl HttpCatalogClient {
    /// Create a client with the default request timeout
    pub fn new(base_url: impl Into<String>) -> Result<Self, CatalogClientError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client whose requests give up after `timeout`
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CatalogClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = Client::builder().timeout(timeout).build()?;
        info!("Catalog client targeting {} (timeout {:?})", base_url, timeout);
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET one collection and return the raw body
    async fn fetch_collection(&self, path: &str) -> Result<String, CatalogClientError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Fetching {}", url);

        let response = self.http.get(&url).send().await.map_err(|e| {
            warn!("Request to {} failed: {}", url, e);
            CatalogClientError::Request(e)
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Catalog service returned {} for {}", status, path);
            return Err(CatalogClientError::UnexpectedStatus {
                endpoint: path.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogClient {
    fn name(&self) -> &str {
        "http"
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn fetch_snapshot(&self) -> Result<CatalogSnapshot, CatalogClientError> {
        let (movies, genres, ratings) = tokio::try_join!(
            self.fetch_collection(MOVIES_PATH),
            self.fetch_collection(GENRES_PATH),
            self.fetch_collection(RATINGS_PATH),
        )?;

        let snapshot = CatalogSnapshot::from_parts(
            parse_movies(&movies)?,
            parse_genres(&genres)?,
            parse_ratings(&ratings)?,
        );

        let (movie_count, genre_count, rating_count) = snapshot.counts();
        debug!(
            "Fetched {} movies, {} genres, {} ratings",
            movie_count, genre_count, rating_count
        );
        Ok(snapshot)
    }
}
