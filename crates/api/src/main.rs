use std::sync::Arc;

use anyhow::Context;

use stocklist_api::app::{self, flash::FlashStore, services::AppServices};
use stocklist_api::config::AppConfig;
use stocklist_infra::InMemoryServices;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stocklist_observability::init();

    let config = AppConfig::from_env();

    let services = if config.seed_demo_data {
        InMemoryServices::with_demo_data()?
    } else {
        tracing::warn!("starting with empty lookup data; no categories or centers");
        InMemoryServices::empty()
    };

    let flash = Arc::new(FlashStore::new(config.flash_ttl));
    let app = app::build_app(AppServices::from(services), flash);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
