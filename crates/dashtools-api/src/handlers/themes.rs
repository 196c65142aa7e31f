//! Theme handlers

use axum::{extract::State, Json};
use dashtools_themes::THEMES;

use crate::{
    models::{ThemeResponse, ThemesResponse},
    state::AppState,
};

/// Selectable themes and the configured default
#[utoipa::path(
    get,
    path = "/api/themes",
    responses(
        (status = 200, description = "Themes and default", body = ThemesResponse)
    )
)]
pub async fn list_themes(State(state): State<AppState>) -> Json<ThemesResponse> {
    Json(ThemesResponse {
        themes: THEMES.into_iter().map(ThemeResponse::from).collect(),
        default: state.theme_defaults.into(),
    })
}
