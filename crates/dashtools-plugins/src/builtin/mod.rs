//! Plugins shipped with the dashboard
//!
//! Each plugin module exposes `descriptor()`. Adding a plugin means adding it
//! to [`manifest`]; the order here is the order plugins are listed in.

mod database_admin;
mod example;

use crate::descriptor::PluginDescriptor;

pub fn manifest() -> Vec<PluginDescriptor> {
    vec![example::descriptor(), database_admin::descriptor()]
}
