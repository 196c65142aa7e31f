//! Example plugin

use crate::{
    descriptor::{PluginDescriptor, PluginMetadata},
    unit::Component,
};

pub fn descriptor() -> PluginDescriptor {
    PluginDescriptor::new(
        PluginMetadata::new(
            "example",
            "Example Plugin",
            "A simple example plugin to demonstrate the plugin system",
            "Utilities",
            "🔧",
        )
        .with_version("1.0.0"),
        Component("ExamplePlugin"),
    )
}
