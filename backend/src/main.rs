//! Resilience Planner - Backend Server
//!
//! Advisory service for Kenyan smallholder farmers: live weather context,
//! generated resilience plans, and follow-up chat, covering all 47 counties.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;

pub use config::Config;

use external::GeminiClient;
use services::{AdvisoryService, SessionStore, WeatherService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub advisory: AdvisoryService,
    pub weather: WeatherService,
    pub sessions: SessionStore,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rsp_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Resilience Planner Server");
    tracing::info!("Environment: {}", config.environment);

    // Select a generative model before serving anything. A missing API key
    // or an unusable model inventory refuses start-up.
    let gemini = GeminiClient::from_config(&config.gemini).await?;
    tracing::info!("Using generative model: {}", gemini.model_name());

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
        advisory: AdvisoryService::new(gemini),
        weather: WeatherService::new(&config.weather),
        sessions: SessionStore::new(),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Resilience Planner API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
