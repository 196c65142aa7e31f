//! Application state for the API server

use std::{sync::Arc, time::Instant};

use dashtools_plugins::PluginRegistry;
use dashtools_themes::ThemeState;

/// Application state shared across all API handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Plugins served by the catalogue endpoints
    pub registry: Arc<PluginRegistry>,
    /// Theme resolved from `DEFAULT_THEME` / `DEFAULT_THEME_VARIANT`
    pub theme_defaults: ThemeState,
    /// Server start time for uptime calculation
    pub start_time: Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(registry: PluginRegistry, theme_defaults: ThemeState) -> Self {
        Self {
            registry: Arc::new(registry),
            theme_defaults,
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
