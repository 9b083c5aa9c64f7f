//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use axum::{extract::Request, Router, ServiceExt};
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tracing::{info, warn};
use user_common::{AppConfig, AppError, AppResult};
use user_db::{create_pool, run_migrations, pool::DEFAULT_MIGRATIONS_DIR};
use user_service::UseCaseFacade;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Strip trailing slashes before routing, so `/health/` matches `/health`
///
/// Must wrap the whole router: a layer added with `Router::layer` runs after
/// the route has already been picked.
pub fn trim_trailing_slash(app: Router) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(app)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    info!("Connecting to PostgreSQL...");
    let db_config = user_db::DatabaseConfig::new(config.database.url.clone()).with_connections(
        config.database.max_connections,
        config.database.min_connections,
    );
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool, DEFAULT_MIGRATIONS_DIR)
            .await
            .map_err(|e| AppError::Database(format!("Migration failed: {e}")))?;
        info!("Migrations applied");
    }

    let usecases = UseCaseFacade::new(pool);
    Ok(AppState::new(usecases, config))
}

/// Run the HTTP server until SIGINT or SIGTERM
pub async fn run_server(app: Router, addr: &str) -> AppResult<()> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Server(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    let app = trim_trailing_slash(app);
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Server(e.to_string()))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, &addr).await
}

/// Resolves on the first SIGINT (Ctrl+C) or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
