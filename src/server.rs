//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, collaborator wiring and the Axum server lifecycle.

use crate::application::credit::StrategyRegistry;
use crate::application::services::AdmissionService;
use crate::config::Config;
use crate::domain::repositories::ClientRepository;
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::credit::HttpCreditInquiry;
use crate::infrastructure::persistence::{PgClientRepository, PgUserStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Credit strategy registry
/// - Credit service client
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - The strategy registry is misconfigured
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let strategies = Arc::new(StrategyRegistry::standard()?);
    tracing::info!(
        strategies = strategies.classifications().len(),
        "Credit strategies registered"
    );

    let credit_inquiry = Arc::new(HttpCreditInquiry::new(
        &config.credit_service_url,
        config.credit_service_timeout(),
    )?);

    let pool = Arc::new(pool);
    let client_repository: Arc<dyn ClientRepository> =
        Arc::new(PgClientRepository::new(pool.clone()));
    let user_store = Arc::new(PgUserStore::new(pool));

    let admission_service = Arc::new(AdmissionService::new(
        client_repository.clone(),
        user_store,
        credit_inquiry,
        Arc::new(SystemClock),
        strategies.clone(),
    ));

    let state = AppState::new(admission_service, client_repository, strategies);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
