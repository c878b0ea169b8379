//! Entry point for the recommendation service.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use catalog_client::HttpCatalogClient;
use pipeline::RecommendationSelector;
use server::{create_router, AppState, Config, RecommendationOrchestrator};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(
                    "info,server=debug,catalog_client=debug,pipeline=debug,sources=debug",
                )
            }),
        )
        .init();

    let config = Config::from_env()?;
    let selector = RecommendationSelector::with_policy(config.degenerate_policy);
    info!(
        "Starting recommendation service (upstream {}, degenerate policy {})",
        config.upstream_base_url,
        selector.policy()
    );

    let catalog = HttpCatalogClient::with_timeout(&config.upstream_base_url, config.upstream_timeout())
        .context("Failed to build catalog client")?;
    let orchestrator = RecommendationOrchestrator::new(Arc::new(catalog), selector);

    let app = create_router(AppState::new(orchestrator));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
