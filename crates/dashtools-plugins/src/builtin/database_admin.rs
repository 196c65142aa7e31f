//! Database Admin plugin

use crate::{
    descriptor::{PluginDescriptor, PluginMetadata},
    unit::Component,
};

pub fn descriptor() -> PluginDescriptor {
    PluginDescriptor::new(
        PluginMetadata::new(
            "database-admin",
            "Database Admin",
            "Administrate your SQLite database: create tables, manage columns, and edit data",
            "Database",
            "🗄️",
        )
        .with_version("1.0.0"),
        Component("DatabaseAdmin"),
    )
}
