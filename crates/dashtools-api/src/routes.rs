//! API route definitions

use axum::{middleware, routing::get, Json, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;

use crate::{
    handlers::{health, plugins, themes},
    state::AppState,
};

/// API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/api/health", get(health::health_check))
        // Plugin catalogue
        .route("/api/plugins", get(plugins::list_plugins))
        .route("/api/plugins/{id}", get(plugins::get_plugin))
        .route("/api/categories", get(plugins::list_categories))
        .route(
            "/api/categories/{category}/plugins",
            get(plugins::list_plugins_in_category),
        )
        // Themes
        .route("/api/themes", get(themes::list_themes))
}

/// OpenAPI document route
pub fn docs_routes() -> Router<AppState> {
    Router::new().route("/api-docs/openapi.json", get(openapi_json))
}

/// Combined routes with CORS and request logging
pub fn all_routes() -> Router<AppState> {
    api_routes()
        .merge(docs_routes())
        .layer(middleware::from_fn(crate::middleware::logging::logging_middleware))
        .layer(CorsLayer::permissive())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// OpenAPI description of the API
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        plugins::list_plugins,
        plugins::get_plugin,
        plugins::list_categories,
        plugins::list_plugins_in_category,
        themes::list_themes,
    ),
    components(schemas(
        crate::models::PluginResponse,
        crate::models::ThemeResponse,
        crate::models::ThemesResponse,
        crate::models::HealthResponse,
        crate::models::ErrorResponse,
    )),
    info(
        title = "DashTools API",
        version = "1.0.0",
        description = "Plugin catalogue and theme defaults for the DashTools dashboard"
    )
)]
pub struct ApiDoc;
