//! Plugin registry
//!
//! Descriptors are kept in registration order. Lookups are computed on each
//! call; nothing is indexed or cached.

use std::collections::{BTreeSet, HashSet};

use crate::{
    builtin,
    descriptor::{PluginDescriptor, PluginMetadata},
    error::{PluginError, Result},
};

/// Immutable, ordered set of plugins
#[derive(Debug, Clone, Default)]
pub struct PluginRegistry {
    plugins: Vec<PluginDescriptor>,
}

impl PluginRegistry {
    pub fn builder() -> PluginRegistryBuilder {
        PluginRegistryBuilder::default()
    }

    /// Build from a manifest list, registering each entry in order
    pub fn from_manifest<I>(manifest: I) -> Result<Self>
    where
        I: IntoIterator<Item = PluginDescriptor>,
    {
        manifest
            .into_iter()
            .try_fold(Self::builder(), PluginRegistryBuilder::register)
            .map(PluginRegistryBuilder::build)
    }

    /// Registry of the plugins shipped with the dashboard
    pub fn builtin() -> Result<Self> {
        Self::from_manifest(builtin::manifest())
    }

    /// All plugins in registration order
    pub fn list_plugins(&self) -> &[PluginDescriptor] {
        &self.plugins
    }

    pub fn get_plugin_by_id(&self, id: &str) -> Option<&PluginDescriptor> {
        let found = self.plugins.iter().find(|p| p.metadata.id == id);
        if found.is_none() {
            tracing::debug!("Plugin not found: {:?}", id);
        }
        found
    }

    /// Plugins whose category matches exactly, in registration order
    pub fn get_plugins_by_category(&self, category: &str) -> Vec<&PluginDescriptor> {
        self.plugins
            .iter()
            .filter(|p| p.metadata.category == category)
            .collect()
    }

    /// Distinct categories, sorted
    pub fn get_categories(&self) -> Vec<String> {
        self.plugins
            .iter()
            .map(|p| p.metadata.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.plugins.iter().any(|p| p.metadata.id == id)
    }

    /// Owned metadata of all plugins in registration order
    pub fn metadata(&self) -> Vec<PluginMetadata> {
        self.plugins.iter().map(|p| p.metadata.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

/// Collects plugins before the registry is sealed
#[derive(Debug, Default)]
pub struct PluginRegistryBuilder {
    plugins: Vec<PluginDescriptor>,
    ids: HashSet<String>,
}

impl PluginRegistryBuilder {
    /// Add one plugin; ids must be unique
    pub fn register(mut self, descriptor: PluginDescriptor) -> Result<Self> {
        descriptor.metadata.validate()?;
        if !self.ids.insert(descriptor.metadata.id.clone()) {
            return Err(PluginError::DuplicateId(descriptor.metadata.id));
        }
        tracing::debug!(
            "Registered plugin {} ({})",
            descriptor.metadata.id,
            descriptor.metadata.category
        );
        self.plugins.push(descriptor);
        Ok(self)
    }

    pub fn build(self) -> PluginRegistry {
        tracing::info!("Plugin registry ready with {} plugins", self.plugins.len());
        PluginRegistry {
            plugins: self.plugins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::Component;

    fn plugin(id: &str, category: &str) -> PluginDescriptor {
        PluginDescriptor::new(
            PluginMetadata::new(id, id.to_uppercase(), "", category, "*"),
            Component("Stub"),
        )
    }

    #[test]
    fn test_registration_order_is_kept() {
        let registry = PluginRegistry::from_manifest(vec![
            plugin("zeta", "B"),
            plugin("alpha", "A"),
            plugin("mid", "B"),
        ])
        .unwrap();

        let ids: Vec<_> = registry.list_plugins().iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = PluginRegistry::from_manifest(vec![plugin("a", "X"), plugin("a", "Y")]);
        assert_eq!(result.unwrap_err(), PluginError::DuplicateId("a".to_string()));
    }

    #[test]
    fn test_invalid_metadata_rejected() {
        let result = PluginRegistry::builder().register(plugin("", "X"));
        assert!(matches!(result, Err(PluginError::InvalidMetadata { .. })));
    }

    #[test]
    fn test_get_plugin_by_id() {
        let registry = PluginRegistry::from_manifest(vec![plugin("a", "X"), plugin("b", "Y")]).unwrap();
        assert_eq!(registry.get_plugin_by_id("b").map(|p| p.id()), Some("b"));
        assert!(registry.get_plugin_by_id("c").is_none());
        assert!(registry.get_plugin_by_id("").is_none());
        assert!(registry.get_plugin_by_id("A").is_none());
    }

    #[test]
    fn test_categories_sorted_and_deduplicated() {
        let registry = PluginRegistry::from_manifest(vec![
            plugin("a", "Database"),
            plugin("b", "Utilities"),
            plugin("c", "Database"),
        ])
        .unwrap();
        assert_eq!(registry.get_categories(), vec!["Database", "Utilities"]);
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        let registry = PluginRegistry::from_manifest(vec![
            plugin("a", "Database"),
            plugin("b", "database"),
            plugin("c", "Database"),
        ])
        .unwrap();

        let matches = registry.get_plugins_by_category("Database");
        let ids: Vec<_> = matches.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(registry.get_plugins_by_category("DATABASE").is_empty());
    }

    #[test]
    fn test_empty_registry() {
        let registry = PluginRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.get_categories().is_empty());
        assert!(registry.list_plugins().is_empty());
    }
}
