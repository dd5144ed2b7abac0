//! Jobs API application composition root
//!
//! Composes the Jobs domain router, the documentation endpoints and the
//! infrastructure routes into a single application.

use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use jobtrack_auth::{AuthBackend, AuthConfig};
use jobtrack_common::{config::API_BASE_PATH, Config, Error};
use jobtrack_jobs::{InMemoryJobRepository, JobRepository, JobsState, PgJobRepository};
use jobtrack_openapi::{swagger_ui_html, ApiMetadata};
use std::sync::Arc;

pub const API_TITLE: &str = "Jobs API";
pub const API_VERSION: &str = "1.0.0";
pub const API_DESCRIPTION: &str = "Jobs API documentation";

pub const DOCS_PATH: &str = "/api-docs";
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Descriptor metadata advertising `server_url` as the API base
pub fn api_metadata(server_url: impl Into<String>) -> ApiMetadata {
    ApiMetadata {
        title: API_TITLE.to_string(),
        version: API_VERSION.to_string(),
        description: Some(API_DESCRIPTION.to_string()),
        server_url: server_url.into(),
    }
}

/// Generated once at startup and shared read-only afterwards
#[derive(Clone)]
struct DocsState {
    descriptor: Arc<serde_json::Value>,
}

/// Pick the job store: PostgreSQL when configured, memory otherwise
pub async fn connect_repository(config: &Config) -> anyhow::Result<Arc<dyn JobRepository>> {
    match &config.database_url {
        Some(url) => {
            let pool = sqlx::PgPool::connect(url)
                .await
                .map_err(|e| anyhow::anyhow!("Database connection failed: {}", e))?;
            PgJobRepository::migrate(&pool)
                .await
                .map_err(|e| anyhow::anyhow!("Database migration failed: {}", e))?;
            tracing::info!("Using PostgreSQL job store");
            Ok(Arc::new(PgJobRepository::new(pool)))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, jobs are kept in memory");
            Ok(Arc::new(InMemoryJobRepository::new()))
        }
    }
}

/// Create the main application router with all routes
///
/// Fails when the API descriptor cannot be generated, so a service
/// with an incomplete contract never starts.
pub fn create_app(config: &Config, repo: Arc<dyn JobRepository>) -> Result<Router, anyhow::Error> {
    let auth = AuthBackend::new(AuthConfig {
        jwt_secret: config.jwt_secret.clone(),
        issuer: config.jwt_issuer.clone(),
        audience: config.jwt_audience.clone(),
    });

    let descriptor = jobtrack_jobs::api_descriptor(api_metadata(config.public_api_url.clone()))
        .map_err(|e| {
            tracing::error!(error = %e, "Invalid route declarations");
            anyhow::anyhow!("API descriptor generation failed: {}", e)
        })?;
    let docs = DocsState {
        descriptor: Arc::new(descriptor.to_json()?),
    };

    let jobs_state = JobsState::new(repo, auth);
    let jobs_router = jobtrack_jobs::routes(&jobs_state).with_state(jobs_state);

    let docs_router = Router::new()
        .route(DOCS_PATH, get(swagger_ui))
        .route(OPENAPI_JSON_PATH, get(openapi_json))
        .with_state(docs);

    let app = Router::new()
        .route("/health", get(health_check))
        .route(
            "/",
            get(|| async { format!("{} v{}", API_TITLE, API_VERSION) }),
        )
        .merge(docs_router)
        .nest(API_BASE_PATH, jobs_router)
        .fallback(route_not_found);

    Ok(app)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

async fn openapi_json(State(docs): State<DocsState>) -> Json<serde_json::Value> {
    Json(docs.descriptor.as_ref().clone())
}

async fn swagger_ui() -> Html<String> {
    Html(swagger_ui_html(API_TITLE, OPENAPI_JSON_PATH))
}

async fn route_not_found() -> impl IntoResponse {
    Error::NotFound("Route does not exist".to_string())
}
