//! Views produced by navigation

use dashtools_plugins::{PluginDescriptor, PluginRegistry};

use crate::loader::MountedPlugin;

/// Landing page contents
#[derive(Debug, Clone)]
pub struct HomeView<'a> {
    pub plugins: &'a [PluginDescriptor],
    pub categories: Vec<String>,
}

impl<'a> HomeView<'a> {
    pub fn new(registry: &'a PluginRegistry) -> Self {
        Self {
            plugins: registry.list_plugins(),
            categories: registry.get_categories(),
        }
    }

    /// Plugins grouped under their sorted categories
    pub fn grouped(&self) -> Vec<(&str, Vec<&'a PluginDescriptor>)> {
        self.categories
            .iter()
            .map(|category| {
                let members: Vec<&'a PluginDescriptor> = self
                    .plugins
                    .iter()
                    .filter(|p| p.metadata.category == *category)
                    .collect();
                (category.as_str(), members)
            })
            .collect()
    }
}

/// What a path renders
#[derive(Debug, Clone)]
pub enum View<'a> {
    Home(HomeView<'a>),
    Plugin(MountedPlugin<'a>),
    /// `/plugin/:id` with an id nobody registered
    PluginNotFound { id: String },
    /// Path outside the route table
    NotFound { path: String },
}

impl<'a> View<'a> {
    pub fn name(&self) -> &'static str {
        match self {
            View::Home(_) => "home",
            View::Plugin(_) => "plugin",
            View::PluginNotFound { .. } => "plugin-not-found",
            View::NotFound { .. } => "not-found",
        }
    }

    /// Page title for the view
    pub fn title(&self) -> String {
        match self {
            View::Home(_) => "Dashboard".to_string(),
            View::Plugin(mounted) => mounted.descriptor.metadata.name.clone(),
            View::PluginNotFound { id } => format!("Plugin not found: {}", id),
            View::NotFound { path } => format!("Page not found: {}", path),
        }
    }
}
