//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use roster_common::{AppConfig, AppError, StorageBackend};
use roster_core::{StudentRepository, VehicleRepository};
use roster_db::{
    create_pool, ensure_schema, InMemoryStudentRepository, InMemoryTaskRepository,
    InMemoryVehicleRepository, PgStudentRepository, PgVehicleRepository,
};
use roster_service::{ServiceContextBuilder, StudentService};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();

    let router = apply_rate_limit(create_router(), &config.rate_limit)?;
    let router = router.merge(health_routes());
    let router = apply_middleware(router, &config.cors, config.app.env.is_production());

    Ok(router.with_state(state))
}

/// Student and vehicle stores share one backend
struct RecordStores {
    students: Arc<dyn StudentRepository>,
    vehicles: Arc<dyn VehicleRepository>,
}

/// Build the record stores selected by configuration
async fn create_record_stores(config: &AppConfig) -> Result<RecordStores, AppError> {
    let email_domain = config.storage.email_domain.clone();

    match config.storage.backend {
        StorageBackend::Memory => {
            info!("Using in-memory record store");
            Ok(RecordStores {
                students: Arc::new(InMemoryStudentRepository::new(email_domain)),
                vehicles: Arc::new(InMemoryVehicleRepository::new()),
            })
        }
        StorageBackend::Postgres => {
            let database = config
                .database
                .as_ref()
                .ok_or_else(|| AppError::Config("DATABASE_URL is required".to_string()))?;

            info!("Connecting to PostgreSQL...");
            let db_config = roster_db::DatabaseConfig::new(
                database.url.clone(),
                database.max_connections,
                database.min_connections,
            );
            let pool = create_pool(&db_config)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            ensure_schema(&pool)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");

            Ok(RecordStores {
                students: Arc::new(PgStudentRepository::new(pool.clone(), email_domain)),
                vehicles: Arc::new(PgVehicleRepository::new(pool)),
            })
        }
    }
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let stores = create_record_stores(&config).await?;
    let task_repo = Arc::new(InMemoryTaskRepository::new());

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .student_repo(stores.students)
        .task_repo(task_repo)
        .vehicle_repo(stores.vehicles)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    if config.storage.seed_demo_data && config.storage.backend == StorageBackend::Memory {
        StudentService::new(&service_context)
            .seed_demo_data()
            .await?;
    }

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(anyhow::anyhow!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config.api.address().parse().map_err(|e| {
        AppError::Config(format!("Invalid bind address {}: {e}", config.api.address()))
    })?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state)?;

    // Run server
    run_server(app, addr).await
}
