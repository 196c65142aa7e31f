//! Configuration manager implementation

use std::{collections::HashMap, path::PathBuf};

use config::{Config, Environment, File};

use crate::{
    error::{ConfigError, Result},
    types::DashboardConfig,
};

const DEFAULT_CONFIG_FILE: &str = "dashtools.toml";

/// Loads [`DashboardConfig`] from file, `.env` and environment
pub struct ConfigManager {
    /// Optional TOML file, lowest precedence
    config_path: Option<PathBuf>,
    /// Whether to read a `.env` file into the process environment first
    load_dotenv: bool,
    /// Explicit variables used instead of the process environment
    vars: Option<HashMap<String, String>>,
}

impl ConfigManager {
    /// Create a manager reading `dashtools.toml`, `.env` and the environment
    pub fn new() -> Self {
        Self {
            config_path: Some(PathBuf::from(DEFAULT_CONFIG_FILE)),
            load_dotenv: true,
            vars: None,
        }
    }

    /// Create with a custom config file path
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: Some(path),
            ..Self::new()
        }
    }

    /// Create a manager that reads only the given variables
    ///
    /// The process environment and `.env` are not consulted; a file is read
    /// only when added with [`ConfigManager::with_file`].
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            config_path: None,
            load_dotenv: false,
            vars: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Also read the TOML file at `path`, below the variables in precedence
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Load and validate the configuration
    pub fn load_config(&self) -> Result<DashboardConfig> {
        if self.load_dotenv {
            match dotenv::dotenv() {
                Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
                Err(e) => tracing::debug!("No .env file loaded: {}", e),
            }
        }

        let mut builder = Config::builder();
        if let Some(path) = &self.config_path {
            builder = builder.add_source(File::from(path.clone()).required(false));
        }

        let mut environment = Environment::default().ignore_empty(true);
        if let Some(vars) = &self.vars {
            environment = environment.source(Some(vars.clone().into_iter().collect()));
        }
        builder = builder.add_source(environment);

        let config: DashboardConfig = builder.build()?.try_deserialize()?;
        self.validate_config(&config)?;
        tracing::debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Reject settings the server cannot start with
    pub fn validate_config(&self, config: &DashboardConfig) -> Result<()> {
        if config.port == 0 {
            return Err(ConfigError::Validation(
                "PORT must be greater than 0".to_string(),
            ));
        }
        if config.bind_host.trim().is_empty() {
            return Err(ConfigError::Validation("BIND_HOST cannot be empty".to_string()));
        }
        if config.api_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "API_URL cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
