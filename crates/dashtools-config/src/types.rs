//! Configuration types

use serde::{Deserialize, Serialize};

pub const DEFAULT_THEME: &str = "rose-pine";
pub const DEFAULT_THEME_VARIANT: &str = "dark";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";
pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Settings read at startup
///
/// Theme names are kept as raw strings here; the theme store validates them
/// against the themes it knows and substitutes its own fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// `DEFAULT_THEME`
    pub default_theme: String,
    /// `DEFAULT_THEME_VARIANT`
    pub default_theme_variant: String,
    /// `PORT`
    pub port: u16,
    /// `BIND_HOST`
    pub bind_host: String,
    /// `API_URL`
    pub api_url: String,
    /// `LOG_LEVEL`
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_theme: DEFAULT_THEME.to_string(),
            default_theme_variant: DEFAULT_THEME_VARIANT.to_string(),
            port: DEFAULT_PORT,
            bind_host: DEFAULT_BIND_HOST.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl DashboardConfig {
    /// Socket address string for the HTTP listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }

    /// Parsed log level, `INFO` when unrecognised
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level
            .trim()
            .parse()
            .unwrap_or(tracing::Level::INFO)
    }
}
