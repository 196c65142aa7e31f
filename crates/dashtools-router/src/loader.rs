//! Plugin loader view

use dashtools_plugins::{MountContext, MountedView, PluginDescriptor, PluginRegistry};

/// A plugin found by id and mounted
#[derive(Debug, Clone)]
pub struct MountedPlugin<'a> {
    pub descriptor: &'a PluginDescriptor,
    pub view: MountedView,
}

/// Result of loading a plugin by id
#[derive(Debug, Clone)]
pub enum LoadOutcome<'a> {
    Loaded(MountedPlugin<'a>),
    NotFound { id: String },
}

impl<'a> LoadOutcome<'a> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded(_))
    }
}

/// Looks plugins up by id and mounts their UI unit
#[derive(Debug, Clone, Copy)]
pub struct PluginLoader<'a> {
    registry: &'a PluginRegistry,
}

impl<'a> PluginLoader<'a> {
    pub fn new(registry: &'a PluginRegistry) -> Self {
        Self { registry }
    }

    /// Mount the plugin registered under `id`, reached through `path`
    pub fn load(&self, id: &str, path: &str) -> LoadOutcome<'a> {
        match self.registry.get_plugin_by_id(id) {
            Some(descriptor) => {
                let view = descriptor.ui_unit.mount(&MountContext {
                    plugin_id: id.to_string(),
                    path: path.to_string(),
                });
                tracing::debug!("Mounted plugin {} as {}", id, view.component);
                LoadOutcome::Loaded(MountedPlugin { descriptor, view })
            }
            None => LoadOutcome::NotFound { id: id.to_string() },
        }
    }
}
