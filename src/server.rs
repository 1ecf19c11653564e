//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, table migration, state construction and the Axum
//! server lifecycle.

use crate::config::Config;
use crate::infrastructure::persistence::PgPlanetRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (lazily connected)
/// - `planets` table migration, when the store is reachable
/// - Axum HTTP server with graceful shutdown
///
/// An unreachable store does not stop startup. The failure is logged and
/// requests fail with a store-unavailable page until the store is back.
///
/// # Errors
///
/// Returns an error if:
/// - The database URL cannot be parsed
/// - A migration fails against a reachable store
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config)?;

    match pool.acquire().await {
        Ok(_) => {
            tracing::info!(
                "Connected to database {}",
                config.database_name().unwrap_or_default()
            );

            if config.run_migrations {
                sqlx::migrate!("./migrations")
                    .run(&pool)
                    .await
                    .context("Failed to migrate")?;
                tracing::info!("Migrations applied");
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "Database connection error");
            if config.run_migrations {
                tracing::warn!("Skipping migrations: database unreachable");
            }
        }
    }

    let repository = Arc::new(PgPlanetRepository::new(Arc::new(pool.clone())));
    let state = AppState::new(repository);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Database disconnected");

    Ok(())
}

/// Builds the process-wide pool without opening a connection.
fn connect_pool(config: &Config) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .after_connect(|_conn, _meta| {
            Box::pin(async move {
                tracing::debug!("Opened database connection");
                Ok(())
            })
        })
        .connect_lazy(&config.database_url)
        .context("Invalid database URL")
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
