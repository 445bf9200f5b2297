mod advice;
mod almanac;
mod config;
mod errors;
mod llm_client;
mod routes;
mod state;
mod weather;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::advice::service::{AdviceService, Generator};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::weather::OpenMeteoClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Volau API v{}", env!("CARGO_PKG_VERSION"));

    // The planner runs with or without a generator
    let generator = match &config.api_key {
        Some(key) => {
            let llm = LlmClient::new(
                key.clone(),
                config.gemini_base_url.clone(),
                config.gemini_model.clone(),
            )?;
            info!("LLM client initialized (model: {})", config.gemini_model);
            Generator::Available(Arc::new(llm))
        }
        None => {
            warn!("No API_KEY or GEMINI_API_KEY set; planner will return configuration notices");
            Generator::Unavailable
        }
    };

    let weather = OpenMeteoClient::new(
        config.weather_url.clone(),
        config.weather_latitude,
        config.weather_longitude,
    )?;
    info!(
        "Weather client initialized ({}, {})",
        config.weather_latitude, config.weather_longitude
    );

    let state = AppState {
        advice: Arc::new(AdviceService::new(generator)),
        weather: Arc::new(weather),
        config: config.clone(),
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()), // TODO: restrict origins once the web client's host is fixed
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
