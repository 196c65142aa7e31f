//! Plugin catalogue handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{ApiError, ApiResult},
    models::{ErrorResponse, PluginResponse},
    state::AppState,
};

/// List all plugins in registration order
#[utoipa::path(
    get,
    path = "/api/plugins",
    responses(
        (status = 200, description = "All registered plugins", body = Vec<PluginResponse>)
    )
)]
pub async fn list_plugins(State(state): State<AppState>) -> Json<Vec<PluginResponse>> {
    Json(
        state
            .registry
            .metadata()
            .into_iter()
            .map(PluginResponse::from)
            .collect(),
    )
}

/// Get one plugin's metadata
#[utoipa::path(
    get,
    path = "/api/plugins/{id}",
    params(("id" = String, Path, description = "Plugin id")),
    responses(
        (status = 200, description = "Plugin metadata", body = PluginResponse),
        (status = 404, description = "Plugin not found", body = ErrorResponse)
    )
)]
pub async fn get_plugin(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PluginResponse>> {
    state
        .registry
        .get_plugin_by_id(&id)
        .map(|plugin| Json(PluginResponse::from(plugin.metadata.clone())))
        .ok_or(ApiError::PluginNotFound(id))
}

/// List distinct plugin categories, sorted
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "Sorted category names", body = Vec<String>)
    )
)]
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.registry.get_categories())
}

/// List plugins in one category
#[utoipa::path(
    get,
    path = "/api/categories/{category}/plugins",
    params(("category" = String, Path, description = "Exact, case-sensitive category")),
    responses(
        (status = 200, description = "Plugins in the category", body = Vec<PluginResponse>)
    )
)]
pub async fn list_plugins_in_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Json<Vec<PluginResponse>> {
    Json(
        state
            .registry
            .get_plugins_by_category(&category)
            .into_iter()
            .map(|plugin| PluginResponse::from(plugin.metadata.clone()))
            .collect(),
    )
}
