//! Route resolution

use std::fmt;

use dashtools_plugins::PluginRegistry;

use crate::{
    loader::{LoadOutcome, PluginLoader},
    view::{HomeView, View},
};

const PLUGIN_PREFIX: &str = "/plugin/";

/// A resolved location
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// Landing page listing plugins
    #[default]
    Home,
    /// A single plugin by id
    Plugin { id: String },
}

impl Route {
    pub fn plugin(id: impl Into<String>) -> Self {
        Route::Plugin { id: id.into() }
    }

    /// Route name, `home` or `plugin`
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Plugin { .. } => "plugin",
        }
    }

    /// Canonical path, with the id percent-encoded
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Plugin { id } => format!("{}{}", PLUGIN_PREFIX, urlencoding::encode(id)),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Maps paths to views over a registry
#[derive(Debug, Clone, Copy)]
pub struct Router<'a> {
    registry: &'a PluginRegistry,
}

impl<'a> Router<'a> {
    pub fn new(registry: &'a PluginRegistry) -> Self {
        Self { registry }
    }

    /// Match a path against the route table
    ///
    /// Query strings, fragments and a single trailing slash are ignored.
    pub fn resolve(path: &str) -> Option<Route> {
        let path = path.split('#').next().unwrap_or_default();
        let path = path.split('?').next().unwrap_or_default();
        let path = match path {
            "" => "/",
            p if p.len() > 1 => p.strip_suffix('/').unwrap_or(p),
            p => p,
        };

        if path == "/" {
            return Some(Route::Home);
        }

        let segment = path.strip_prefix(PLUGIN_PREFIX)?;
        if segment.is_empty() || segment.contains('/') {
            return None;
        }
        let id = urlencoding::decode(segment).ok()?;
        if id.is_empty() || id.contains('/') {
            return None;
        }
        Some(Route::plugin(id.into_owned()))
    }

    /// Resolve a path and build the view for it
    pub fn navigate(&self, path: &str) -> View<'a> {
        let view = match Self::resolve(path) {
            Some(Route::Home) => View::Home(HomeView::new(self.registry)),
            Some(Route::Plugin { id }) => match self.loader().load(&id, path) {
                LoadOutcome::Loaded(mounted) => View::Plugin(mounted),
                LoadOutcome::NotFound { id } => View::PluginNotFound { id },
            },
            None => View::NotFound {
                path: path.to_string(),
            },
        };
        tracing::debug!("Navigated to {} -> {}", path, view.name());
        view
    }

    pub fn loader(&self) -> PluginLoader<'a> {
        PluginLoader::new(self.registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_home() {
        assert_eq!(Router::resolve("/"), Some(Route::Home));
        assert_eq!(Router::resolve(""), Some(Route::Home));
        assert_eq!(Router::resolve("/?tab=all"), Some(Route::Home));
        assert_eq!(Router::resolve("/#top"), Some(Route::Home));
    }

    #[test]
    fn test_resolve_plugin() {
        assert_eq!(Router::resolve("/plugin/example"), Some(Route::plugin("example")));
        assert_eq!(
            Router::resolve("/plugin/database-admin/"),
            Some(Route::plugin("database-admin"))
        );
        assert_eq!(
            Router::resolve("/plugin/example?debug=1#log"),
            Some(Route::plugin("example"))
        );
        assert_eq!(
            Router::resolve("/plugin/my%20plugin"),
            Some(Route::plugin("my plugin"))
        );
    }

    #[test]
    fn test_resolve_rejects_other_paths() {
        assert_eq!(Router::resolve("/plugin"), None);
        assert_eq!(Router::resolve("/plugin/"), None);
        assert_eq!(Router::resolve("/plugin/a/b"), None);
        assert_eq!(Router::resolve("/plugins/example"), None);
        assert_eq!(Router::resolve("plugin/example"), None);
        assert_eq!(Router::resolve("/settings"), None);
        assert_eq!(Router::resolve("/plugin/a%2Fb"), None);
        assert_eq!(Router::resolve("/plugin/%2F"), None);
    }

    #[test]
    fn test_route_path_round_trips() {
        for route in [Route::Home, Route::plugin("example"), Route::plugin("my plugin")] {
            assert_eq!(Router::resolve(&route.path()), Some(route.clone()));
        }
        assert_eq!(Route::plugin("a b").path(), "/plugin/a%20b");
    }

    #[test]
    fn test_route_names() {
        assert_eq!(Route::Home.name(), "home");
        assert_eq!(Route::plugin("x").name(), "plugin");
    }
}
