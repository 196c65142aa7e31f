//! DashTools
//!
//! Dashboard shell made of a plugin registry, a persisted theme store and a
//! two-route router. This crate re-exports the workspace crates and wires the
//! pieces together for a browser-like session.

use std::sync::Arc;

pub use dashtools_api as api;
pub use dashtools_config as config;
pub use dashtools_plugins as plugins;
pub use dashtools_router as router;
pub use dashtools_storage as storage;
pub use dashtools_themes as themes;

use dashtools_config::DashboardConfig;
use dashtools_plugins::{PluginRegistry, Result as PluginResult};
use dashtools_router::{Router, View};
use dashtools_storage::KeyValueStore;
use dashtools_themes::{PresentationContext, ThemeState, ThemeStore};

/// One page session: the theme store and plugin registry views share
pub struct Dashboard {
    registry: PluginRegistry,
    themes: ThemeStore,
}

impl Dashboard {
    /// Restore the theme and build the built-in plugin registry
    pub fn start(
        config: &DashboardConfig,
        storage: Arc<dyn KeyValueStore>,
        presentation: Arc<dyn PresentationContext>,
    ) -> PluginResult<Self> {
        let themes = ThemeStore::initialize(storage, presentation, ThemeState::from_config(config));
        Ok(Self::with_parts(PluginRegistry::builtin()?, themes))
    }

    pub fn with_parts(registry: PluginRegistry, themes: ThemeStore) -> Self {
        Self { registry, themes }
    }

    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }

    pub fn themes(&self) -> &ThemeStore {
        &self.themes
    }

    pub fn router(&self) -> Router<'_> {
        Router::new(&self.registry)
    }

    /// Resolve `path` to the view to render
    pub fn navigate(&self, path: &str) -> View<'_> {
        self.router().navigate(path)
    }

    /// End the session; theme changes are no longer applied or saved
    pub fn dispose(&self) {
        self.themes.dispose();
    }
}
