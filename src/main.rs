//! quantumx-market server entry point.
//!
//! Loads the seed data, starts the price ticker, and serves the REST and
//! WebSocket endpoints.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use quantumx_market::api;
use quantumx_market::app_state::AppState;
use quantumx_market::config::MarketConfig;
use quantumx_market::seed;
use quantumx_market::service::spawn_ticker;
use quantumx_market::ws::handler::ws_handler;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = MarketConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting quantumx-market");

    // Build stores and services from the seed
    let app_state = AppState::from_seed(&config, seed::load())?;
    tracing::info!(
        tokens = app_state.market.store().len().await,
        rooms = app_state.rooms.registry().len().await,
        "seed data loaded"
    );

    // Start the price ticker; the handle stops it when dropped
    let _ticker = if config.ticker_enabled {
        let rng = config
            .rng_seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Some(spawn_ticker(
            Arc::clone(&app_state.market),
            config.tick_interval,
            rng,
        ))
    } else {
        tracing::info!("price ticker disabled");
        None
    };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
