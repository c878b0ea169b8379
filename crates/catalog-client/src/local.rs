//! Catalog sources that never touch the network.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use data_loader::CatalogSnapshot;

use crate::{CatalogClientError, CatalogSource};

/// Loads a snapshot from `movies.json`, `genres.json` and `ratings.json`
/// in a directory, re-reading the files on every fetch.
#[derive(Debug, Clone)]
pub struct DirectoryCatalog {
    dir: PathBuf,
}

impl DirectoryCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl CatalogSource for DirectoryCatalog {
    fn name(&self) -> &str {
        "directory"
    }

    async fn fetch_snapshot(&self) -> Result<CatalogSnapshot, CatalogClientError> {
        let dir = self.dir.clone();
        debug!("Loading catalog from {}", dir.display());

        let snapshot = tokio::task::spawn_blocking(move || CatalogSnapshot::load_from_files(&dir))
            .await
            .map_err(|e| CatalogClientError::Task(e.to_string()))??;
        Ok(snapshot)
    }
}

/// Serves copies of a fixed snapshot
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    snapshot: Arc<CatalogSnapshot>,
}

impl StaticCatalog {
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
        }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_snapshot(&self) -> Result<CatalogSnapshot, CatalogClientError> {
        Ok(self.snapshot.as_ref().clone())
    }
}
