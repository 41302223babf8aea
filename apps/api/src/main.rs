mod actor;
mod applications;
mod catalog;
mod config;
mod errors;
mod matching;
mod models;
mod profile;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::latency::SimulatedLatency;
use crate::catalog::{Catalog, CatalogStore};
use crate::config::Config;
use crate::matching::scoring::SkillOverlapScorer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Matchboard API v{}", env!("CARGO_PKG_VERSION"));

    let catalog = if config.seed_fixtures {
        Catalog::seeded()
    } else {
        Catalog::bare()
    };
    info!(
        jobs = catalog.jobs.len(),
        resumes = catalog.resumes.len(),
        skills = catalog.skills.len(),
        "Catalog initialized"
    );

    let latency = SimulatedLatency::new(config.simulate_latency);
    if !latency.is_enabled() {
        info!("Simulated latency disabled");
    }

    let state = AppState {
        store: CatalogStore::new(catalog, latency),
        config: config.clone(),
        match_scorer: Arc::new(SkillOverlapScorer),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
