use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resumatch_api::analysis::Analyzer;
use resumatch_api::config::Config;
use resumatch_api::extraction::DefaultTextExtractor;
use resumatch_api::routes::build_router;
use resumatch_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resumatch API v{}", env!("CARGO_PKG_VERSION"));

    // Validate the scoring policy up front; a bad weight table never reaches a request.
    let analyzer = Analyzer::new(config.scoring.clone())?;
    let policy = analyzer.policy();
    info!(
        "Scoring policy: weights skills={} experience={} keywords={} education={}, match={}",
        policy.weights.skills,
        policy.weights.experience,
        policy.weights.keywords,
        policy.weights.education,
        policy.match_policy
    );

    let state = AppState {
        config: config.clone(),
        analyzer: Arc::new(analyzer),
        extractor: Arc::new(DefaultTextExtractor),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
