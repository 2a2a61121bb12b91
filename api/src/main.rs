//! Users API Server
//!
//! A small user-management service split into three layers: repository
//! (persistence), service (business) and handlers (HTTP).
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;

use adapters::{ensure_schema, PostgresUserRepository};
use app::UserService;
use config::Config;
use domain::ports::UserRepository;

/// Application state shared across all handlers
pub struct AppState<UR: UserRepository> {
    pub user_service: Arc<UserService<UR>>,
    pub config: Config,
}

impl<UR: UserRepository> Clone for AppState<UR> {
    fn clone(&self) -> Self {
        Self {
            user_service: self.user_service.clone(),
            config: self.config.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router for the given state
pub fn build_router<UR>(state: AppState<UR>) -> Router
where
    UR: UserRepository + 'static,
{
    let mut registration_routes: Router<AppState<UR>> =
        Router::new().route("/users", post(handlers::register::<UR>));

    // Rate limiting keys on the peer IP, so the server must be run with connect info
    if state.config.rate_limit_enabled {
        let governor_config = GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(state.config.rate_limit_replenish_secs)
            .burst_size(state.config.rate_limit_burst)
            .finish();

        match governor_config {
            Some(config) => {
                registration_routes = registration_routes.layer(GovernorLayer {
                    config: Arc::new(config),
                });
            }
            None => tracing::warn!(
                "Invalid rate limit settings (replenish_secs={}, burst={}), registration is not rate limited",
                state.config.rate_limit_replenish_secs,
                state.config.rate_limit_burst
            ),
        }
    }

    Router::new()
        // Health check
        .route("/health", get(health))
        .route("/users/:id", get(handlers::get_user::<UR>))
        .merge(registration_routes)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,users_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting users API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    if config.sync_schema {
        ensure_schema(&db)
            .await
            .context("Failed to create database schema")?;
    }

    // Repository -> service -> handlers
    let user_repo = Arc::new(PostgresUserRepository::new(db));
    let user_service = Arc::new(UserService::new(user_repo));

    let state = AppState {
        user_service,
        config: config.clone(),
    };

    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
