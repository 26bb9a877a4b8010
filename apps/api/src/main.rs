use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use workscope_api::config::Config;
use workscope_api::matching::scorer::SubstringMatchScorer;
use workscope_api::routes::build_router;
use workscope_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting WorkScope Match API v{}", env!("CARGO_PKG_VERSION"));

    let match_scorer = Arc::new(SubstringMatchScorer);
    info!(
        "Match scorer initialized (backend: substring, default rank limit: {})",
        config.rank_default_limit
    );

    let cors = build_cors_layer(&config.cors_allowed_origins)?;

    let state = AppState {
        config: config.clone(),
        match_scorer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Permissive when no origins are configured, otherwise an exact allow-list.
fn build_cors_layer(origins: &[String]) -> Result<CorsLayer> {
    if origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let origins = origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o).with_context(|| format!("Invalid CORS origin '{o}'"))
        })
        .collect::<Result<Vec<_>>>()?;
    info!("CORS restricted to {} origin(s)", origins.len());

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any))
}
