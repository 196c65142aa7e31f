//! DashTools Plugin Registry
//!
//! Plugins are UI modules described by metadata plus an opaque mountable
//! unit. The registry is assembled once at startup by explicit registration
//! and is read-only afterwards.

pub mod builtin;
pub mod descriptor;
pub mod error;
pub mod registry;
pub mod unit;

pub use descriptor::{PluginDescriptor, PluginMetadata};
pub use error::{PluginError, Result};
pub use registry::{PluginRegistry, PluginRegistryBuilder};
pub use unit::{Component, MountContext, Mountable, MountedView, UiUnit};
