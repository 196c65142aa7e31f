//! Mountable UI units
//!
//! The registry never looks inside a unit. Mounting hands the host framework
//! a component name and the props to render it with.

use std::{collections::BTreeMap, fmt, sync::Arc};

/// What a plugin view is mounted with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountContext {
    /// Id the plugin was loaded by
    pub plugin_id: String,
    /// Path that resolved to the plugin view
    pub path: String,
}

/// Instruction to the host framework to render a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedView {
    pub component: String,
    pub props: BTreeMap<String, String>,
}

/// A framework-specific renderable component
pub trait Mountable: Send + Sync {
    /// Name the host framework resolves the component by
    fn component_name(&self) -> &str;

    fn mount(&self, context: &MountContext) -> MountedView {
        MountedView {
            component: self.component_name().to_string(),
            props: BTreeMap::from([("id".to_string(), context.plugin_id.clone())]),
        }
    }
}

/// Component known by name only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component(pub &'static str);

impl Mountable for Component {
    fn component_name(&self) -> &str {
        self.0
    }
}

/// Shared handle to a plugin's mountable unit
#[derive(Clone)]
pub struct UiUnit(Arc<dyn Mountable>);

impl UiUnit {
    pub fn new<M>(mountable: M) -> Self
    where
        M: Mountable + 'static,
    {
        Self(Arc::new(mountable))
    }

    pub fn component_name(&self) -> &str {
        self.0.component_name()
    }

    pub fn mount(&self, context: &MountContext) -> MountedView {
        self.0.mount(context)
    }
}

impl fmt::Debug for UiUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UiUnit").field(&self.component_name()).finish()
    }
}

impl From<Component> for UiUnit {
    fn from(component: Component) -> Self {
        Self::new(component)
    }
}
