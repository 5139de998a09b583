use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use cinematch_api::config::Config;
use cinematch_api::routes::create_router;
use cinematch_api::services::catalog::CatalogIndex;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // A dataset failure here aborts startup: the service never comes up with
    // a half-built index.
    let catalog = CatalogIndex::from_path(&config.dataset_path)
        .with_context(|| format!("failed to build catalog index from {}", config.dataset_path))?;

    let app = create_router(Arc::new(catalog));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
