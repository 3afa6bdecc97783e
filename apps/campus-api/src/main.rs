//! Campus API server.
//!
//! Single-process backend hosting the authentication endpoints and the
//! student/group roster endpoints over one Postgres database.

mod config;
mod logging;
mod openapi;

use axum::Router;
use campus_api_auth::{
    auth_router, AuthService, AuthState, EmailPublisher, EmailWorker, LogEmailSender,
    PgRevocationStore, TokenConfig, TokenService,
};
use campus_api_roster::roster_router;
use campus_db::RevokedToken;
use config::Config;
use openapi::openapi_routes;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Maximum accepted request body size in bytes.
const MAX_BODY_SIZE: usize = 1024 * 1024;

/// How often lapsed revocation entries are swept.
const REVOCATION_CLEANUP_INTERVAL: Duration = Duration::from_secs(15 * 60);

#[tokio::main]
async fn main() {
    // Load configuration (fail-fast on missing required values)
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    logging::init_logging(&config.rust_log);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.host,
        port = config.port,
        "Starting campus API"
    );

    // Create database connection pool
    let pool = match PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&config.database_url)
        .await
    {
        Ok(pool) => {
            info!("Database connection established");
            pool
        }
        Err(e) => {
            eprintln!("Failed to connect to database: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = campus_db::run_migrations(&pool).await {
        eprintln!("FATAL: Database migration failed: {e}");
        std::process::exit(1);
    }

    // Verification email queue and its worker. The sender only logs for
    // now (replace with an SMTP sender in production).
    let (email_publisher, email_rx) = EmailPublisher::new(1024);
    let email_worker = EmailWorker::new(email_rx, Arc::new(LogEmailSender::new()));
    tokio::spawn(email_worker.run());
    info!("Verification email worker started");

    // Authentication services
    let auth_service = AuthService::new(pool.clone());

    let token_config = TokenConfig {
        secret: config.jwt_secret.as_bytes().to_vec(),
        access_token_minutes: config.access_token_minutes,
        refresh_token_days: config.refresh_token_days,
        revocation_ttl_secs: config.revocation_ttl_secs,
    };
    let revocation_store = Arc::new(PgRevocationStore::new(pool.clone()));
    let token_service = TokenService::new(token_config, revocation_store);

    let auth_state = AuthState::new(
        pool.clone(),
        auth_service,
        token_service,
        email_publisher.clone(),
    );

    let cors = build_cors_layer(&config.cors_origins);

    // Build the router
    let app = Router::new()
        .merge(auth_router(auth_state))
        .merge(roster_router(pool.clone()))
        .merge(openapi_routes())
        .layer(tower_http::limit::RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(cors);

    // Periodically sweep lapsed revocation entries. The registry stops
    // honoring them immediately at expiry; this only reclaims the rows.
    {
        let cleanup_pool = pool.clone();
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(REVOCATION_CLEANUP_INTERVAL).await;
                match RevokedToken::delete_expired(&cleanup_pool).await {
                    Ok(count) if count > 0 => {
                        tracing::info!(deleted = count, "Cleaned up lapsed revocation entries");
                    }
                    Ok(_) => {}
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to clean up revocation entries");
                    }
                }
            }
        });
    }

    // Bind and serve
    let addr: SocketAddr = match config.bind_addr().parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!("Invalid bind address '{}': {e}", config.bind_addr());
            std::process::exit(1);
        }
    };

    info!(%addr, "Server listening");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind to address {addr}: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }

    info!("Server shutdown complete");
}

/// Build CORS layer from configured origins.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let is_wildcard = origins.len() == 1 && origins[0] == "*";

    if is_wildcard {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
            .max_age(Duration::from_secs(3600))
    } else {
        let allowed: Vec<axum::http::HeaderValue> =
            origins.iter().filter_map(|o| o.parse().ok()).collect();
        CorsLayer::new()
            .allow_origin(tower_http::cors::AllowOrigin::list(allowed))
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
            ])
            .allow_headers([
                axum::http::header::AUTHORIZATION,
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .max_age(Duration::from_secs(3600))
    }
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
