use std::sync::Arc;

use anyhow::Context;

use sweetshop_api::app::{self, services, AppServices};
use sweetshop_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env().context("failed to load configuration")?;
    sweetshop_observability::init_with(config.log_format);

    let services = Arc::new(AppServices::from_config(&config).context("failed to seed catalog")?);
    services::spawn_activity_log(&services);
    tracing::info!(
        items = services.inventory.len(),
        seeded = config.seed_catalog,
        "inventory ready"
    );

    let app = app::build_app(services);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
