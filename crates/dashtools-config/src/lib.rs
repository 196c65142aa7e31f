//! DashTools Configuration
//!
//! Startup settings are read once, from an optional TOML file, a `.env` file
//! and the process environment, in increasing order of precedence.

pub mod error;
pub mod manager;
pub mod types;

pub use error::{ConfigError, Result};
pub use manager::ConfigManager;
pub use types::DashboardConfig;
