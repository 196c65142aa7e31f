//! API request and response models

use dashtools_plugins::PluginMetadata;
use dashtools_themes::ThemeState;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Plugin catalogue entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PluginResponse {
    /// Unique plugin id
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Category label
    pub category: String,
    /// Icon glyph
    pub icon: String,
    /// Plugin version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl From<PluginMetadata> for PluginResponse {
    fn from(metadata: PluginMetadata) -> Self {
        Self {
            id: metadata.id,
            name: metadata.name,
            description: metadata.description,
            category: metadata.category,
            icon: metadata.icon,
            version: metadata.version,
        }
    }
}

/// Theme/variant pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ThemeResponse {
    /// Theme name
    pub theme: String,
    /// `light` or `dark`
    pub variant: String,
}

impl From<ThemeState> for ThemeResponse {
    fn from(state: ThemeState) -> Self {
        Self {
            theme: state.theme.to_string(),
            variant: state.variant.to_string(),
        }
    }
}

/// Selectable themes and the configured default
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ThemesResponse {
    /// Every selectable pair
    pub themes: Vec<ThemeResponse>,
    /// Pair used when the client has nothing saved
    pub default: ThemeResponse,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `ok` while serving
    pub status: String,
    /// Server version
    pub version: String,
    /// Seconds since start
    pub uptime: u64,
}

/// Error body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
}
