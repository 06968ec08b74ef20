use anyhow::Context as _;
use tracing::info;
use tracing_subscriber::EnvFilter;

use postd::{Config, PostStore, Server, api};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .compact()
        .init();

    let config = Config::from_env();
    info!(bind = %config.bind, database = %config.database_url, "starting postd");

    let store = PostStore::connect(&config.database_url)
        .await
        .with_context(|| format!("failed to open database at {}", config.database_url))?;

    Server::bind(&config.bind)
        .serve(api::routes(), store)
        .await
        .context("server error")?;

    Ok(())
}
