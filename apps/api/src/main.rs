mod config;
mod errors;
mod experience;
mod llm_client;
mod parsing;
mod routes;
mod state;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::experience::ExperiencePipeline;
use crate::llm_client::{ExtractionBackend, LlmClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume parser API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the extraction backend once; everything downstream gets the trait object
    let llm = LlmClient::new(&config).context("Failed to build LLM HTTP client")?;
    info!("LLM client initialized (model: {})", llm.model());
    let backend: Arc<dyn ExtractionBackend> = Arc::new(llm);

    let experience = Arc::new(ExperiencePipeline::from_config(backend, &config));
    info!(
        "Experience pipeline ready (chunk budget: {} chars, timeout: {}s)",
        config.chunk_max_chars, config.extraction_timeout_secs
    );
    if config.expected_authorization().is_none() {
        info!("BASIC_AUTH_TOKEN not set; /parse is unauthenticated");
    }

    let cors = build_cors(&config)?;

    // Build app state
    let state = AppState {
        experience,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// CORS for the single configured front-end origin, credentials allowed.
fn build_cors(config: &Config) -> Result<CorsLayer> {
    let origin: HeaderValue = config
        .cors_allowed_origin
        .parse()
        .with_context(|| format!("Invalid CORS_ALLOWED_ORIGIN '{}'", config.cors_allowed_origin))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]))
}
