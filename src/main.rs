use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use school_activities::config::Config;
use school_activities::database::ActivityRegistry;
use school_activities::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before reading any settings
    dotenv().ok();

    // 1. Logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Config + registry
    let config = Config::from_env().context("reading configuration")?;
    let registry = Arc::new(ActivityRegistry::seeded());
    info!(activities = registry.len(), "activity registry seeded");

    // 3. Router
    let app = web::build_router(registry, &config.static_dir);

    // 4. Bind, falling back to the next port if the configured one is taken
    let listener = bind(&config).await?;
    let bound_addr = listener.local_addr()?;
    info!("server listening on http://{}", bound_addr);
    info!("frontend at http://{}{}", bound_addr, web::FRONTEND_ENTRY);

    axum::serve(listener, app).await.context("serving http")?;
    Ok(())
}

async fn bind(config: &Config) -> anyhow::Result<TcpListener> {
    let addr = config.addr()?;
    match TcpListener::bind(addr).await {
        Ok(listener) => Ok(listener),
        Err(e) => {
            let fallback = config
                .fallback_addr()
                .with_context(|| format!("binding {}: {}", addr, e))?;
            warn!("could not bind {}: {}; trying {}", addr, e, fallback);
            TcpListener::bind(fallback)
                .await
                .with_context(|| format!("binding fallback {}", fallback))
        }
    }
}
