//! DashTools Router
//!
//! Two routes: `/` shows the plugin catalogue and `/plugin/:id` loads one
//! plugin by id. Unknown ids become a not-found view rather than an error.

pub mod loader;
pub mod route;
pub mod view;

pub use loader::{LoadOutcome, MountedPlugin, PluginLoader};
pub use route::{Route, Router};
pub use view::{HomeView, View};
