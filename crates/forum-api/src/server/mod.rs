//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use forum_common::{AppConfig, AppError, JwtService};
use forum_db::{create_pool, PgCommentRepository, PgEngagementRepository, PgThreadRepository};
use forum_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = forum_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));

    // Create repositories
    let thread_repo = Arc::new(PgThreadRepository::new(pool.clone()));
    let comment_repo = Arc::new(PgCommentRepository::new(pool.clone()));
    let engagement_repo = Arc::new(PgEngagementRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .thread_repo(thread_repo)
        .comment_repo(comment_repo)
        .engagement_repo(engagement_repo)
        .jwt_service(jwt_service)
        .build()
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?;

    Ok(AppState::new(service_context, config))
}

/// Run the API server until shutdown
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.server.address();
    let state = create_app_state(config).await?;
    let app = create_app(state);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Internal(e.into()))?;

    info!(%addr, "API server listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Internal(e.into()))?;

    Ok(())
}
