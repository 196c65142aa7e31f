//! Presentation context
//!
//! The rendering layer selects visuals from two attributes on its root
//! element. This is the only thing the theme store tells it.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::types::ThemeState;

/// Attribute carrying the active theme name
pub const THEME_ATTRIBUTE: &str = "data-theme";
/// Attribute carrying the active variant
pub const VARIANT_ATTRIBUTE: &str = "data-variant";

/// Root element of whatever renders the dashboard
pub trait PresentationContext: Send + Sync {
    fn set_attribute(&self, name: &str, value: &str);

    fn attribute(&self, name: &str) -> Option<String>;
}

/// Write both theme attributes for `state`
pub fn apply(context: &dyn PresentationContext, state: &ThemeState) {
    context.set_attribute(THEME_ATTRIBUTE, state.theme.as_str());
    context.set_attribute(VARIANT_ATTRIBUTE, state.variant.as_str());
}

/// In-memory root element
#[derive(Debug, Default)]
pub struct DocumentRoot {
    attributes: RwLock<BTreeMap<String, String>>,
}

impl DocumentRoot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all attributes
    pub fn attributes(&self) -> BTreeMap<String, String> {
        self.attributes.read().clone()
    }
}

impl PresentationContext for DocumentRoot {
    fn set_attribute(&self, name: &str, value: &str) {
        self.attributes
            .write()
            .insert(name.to_string(), value.to_string());
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.read().get(name).cloned()
    }
}
