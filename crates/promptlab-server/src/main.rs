use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod error;
mod extractor;
mod models;
mod routes;
#[cfg(test)]
mod testing;

use adapters::InMemoryStore;
use application::{write_gate, CollectionService, PromptService};
use config::ServerConfig;

/// Type aliases for application services with concrete repository implementations
pub type AppPromptService = PromptService<InMemoryStore, InMemoryStore>;
pub type AppCollectionService = CollectionService<InMemoryStore, InMemoryStore>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub prompt_service: Arc<AppPromptService>,
    pub collection_service: Arc<AppCollectionService>,
}

#[derive(Serialize, ToSchema)]
pub struct HealthCheck {
    status: String,
    version: String,
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is running", body = HealthCheck)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Wire the application services over one fresh in-memory store
pub fn build_state() -> AppState {
    let store = Arc::new(InMemoryStore::new());
    let writes = write_gate();

    let prompt_service = Arc::new(PromptService::new(
        store.clone(),
        store.clone(),
        writes.clone(),
    ));
    let collection_service = Arc::new(CollectionService::new(store.clone(), store, writes));

    AppState {
        prompt_service,
        collection_service,
    }
}

/// Build the router with shared state and middleware
pub fn app(state: AppState, config: &ServerConfig) -> anyhow::Result<Router> {
    let mut router = Router::new()
        .route("/health", get(health_check))
        .merge(routes::prompt::router())
        .merge(routes::collection::router());

    if config.swagger_enabled {
        let openapi = routes::swagger::ApiDoc::openapi();
        router = router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));
    }

    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(config.cors_layer()?);

    Ok(router.layer(middleware).with_state(state))
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("📝 PromptLab API initializing...");

    let config = ServerConfig::from_secrets(&secrets)?;

    if config.cors_allowed_origins.is_empty() {
        tracing::warn!("⚠️  No CORS_ALLOWED_ORIGINS set - allowing any origin");
    } else {
        tracing::info!("🌐 CORS origins: {}", config.cors_allowed_origins.join(", "));
    }

    let router = app(build_state(), &config)?;

    if config.swagger_enabled {
        tracing::info!("📚 Swagger UI: /swagger-ui");
    }
    tracing::info!("✅ PromptLab API ready (in-memory store, nothing is persisted)");

    Ok(router.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    use crate::testing::{send, test_app};

    #[tokio::test]
    async fn test_health_check() {
        let app = test_app();
        let (status, body) = send(&app, "GET", "/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_swagger_can_be_disabled() {
        let config = ServerConfig {
            swagger_enabled: false,
            ..ServerConfig::default()
        };
        let app = app(build_state(), &config).unwrap();

        let (status, _) = send(&app, "GET", "/api-docs/openapi.json", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, doc) = send(&test_app(), "GET", "/api-docs/openapi.json", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(doc["info"]["title"], "PromptLab API");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (status, _) = send(&test_app(), "GET", "/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
