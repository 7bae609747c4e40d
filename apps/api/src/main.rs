mod config;
mod errors;
mod matching;
mod routes;
mod state;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::net::SocketAddr;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::matching::matcher::CvMatcher;
use crate::matching::normalizer::TextNormalizer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on invalid env values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={level},tower_http={level}",
                env!("CARGO_CRATE_NAME"),
                level = &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV Matcher API v{}", env!("CARGO_PKG_VERSION"));

    // Build the matcher once; every request shares it read-only
    let normalizer = TextNormalizer::english().context("Failed to build text normalizer")?;
    let matcher = CvMatcher::new(normalizer, config.skill_vocabulary.clone())
        .context("Failed to build CV matcher")?;
    info!(
        "CV matcher initialized ({} skill terms)",
        matcher.vocabulary().len()
    );
    debug!("Skill vocabulary: {}", matcher.vocabulary().terms().join(", "));

    let state = AppState {
        matcher: Arc::new(matcher),
    };

    let cors = build_cors(&config)?;
    info!("CORS allowed origin: {}", config.cors_allowed_origin);

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

/// Single-origin CORS with credentials. Methods and headers mirror the
/// preflight request, since wildcards are not allowed alongside credentials.
fn build_cors(config: &Config) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(&config.cors_allowed_origin)
        .context("CORS_ALLOWED_ORIGIN must be a valid header value")?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}
