//! Plugin metadata and descriptors

use serde::{Deserialize, Serialize};

use crate::{
    error::{PluginError, Result},
    unit::UiUnit,
};

/// Catalogue entry shown in listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginMetadata {
    /// Stable unique key, used in `/plugin/:id`
    pub id: String,
    pub name: String,
    pub description: String,
    /// Grouping label, compared case-sensitively
    pub category: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl PluginMetadata {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            category: category.into(),
            icon: icon.into(),
            version: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Reject metadata the registry cannot key or display
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| PluginError::InvalidMetadata {
            id: self.id.clone(),
            reason: reason.to_string(),
        };

        if self.id.trim().is_empty() {
            return Err(invalid("id cannot be empty"));
        }
        if self.id.contains('/') {
            return Err(invalid("id cannot contain '/'"));
        }
        if self.name.trim().is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if self.category.trim().is_empty() {
            return Err(invalid("category cannot be empty"));
        }
        Ok(())
    }
}

/// Metadata plus the unit that renders the plugin
#[derive(Debug, Clone)]
pub struct PluginDescriptor {
    pub metadata: PluginMetadata,
    pub ui_unit: UiUnit,
}

impl PluginDescriptor {
    pub fn new(metadata: PluginMetadata, ui_unit: impl Into<UiUnit>) -> Self {
        Self {
            metadata,
            ui_unit: ui_unit.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.metadata.id
    }

    pub fn category(&self) -> &str {
        &self.metadata.category
    }
}
