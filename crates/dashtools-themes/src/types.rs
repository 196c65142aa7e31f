//! Core theme types

use std::{fmt, str::FromStr};

use dashtools_config::DashboardConfig;
use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Theme families known to the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeName {
    RosePine,
    Everforest,
}

impl ThemeName {
    pub const ALL: [ThemeName; 2] = [ThemeName::RosePine, ThemeName::Everforest];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::RosePine => "rose-pine",
            ThemeName::Everforest => "everforest",
        }
    }
}

impl FromStr for ThemeName {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ThemeError::UnknownTheme(s.to_string()))
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Light or dark rendering of a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    Light,
    Dark,
}

impl ThemeVariant {
    pub const ALL: [ThemeVariant; 2] = [ThemeVariant::Light, ThemeVariant::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeVariant::Light => "light",
            ThemeVariant::Dark => "dark",
        }
    }

    /// The opposite variant
    pub fn toggled(&self) -> Self {
        match self {
            ThemeVariant::Light => ThemeVariant::Dark,
            ThemeVariant::Dark => ThemeVariant::Light,
        }
    }
}

impl FromStr for ThemeVariant {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str() == s)
            .ok_or_else(|| ThemeError::UnknownVariant(s.to_string()))
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active theme selection
///
/// Serializes as `{"theme": .., "variant": ..}`, which is also the persisted
/// record layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThemeState {
    pub theme: ThemeName,
    pub variant: ThemeVariant,
}

/// Every selectable theme/variant pair, in menu order
pub const THEMES: [ThemeState; 4] = [
    ThemeState::new(ThemeName::RosePine, ThemeVariant::Light),
    ThemeState::new(ThemeName::RosePine, ThemeVariant::Dark),
    ThemeState::new(ThemeName::Everforest, ThemeVariant::Light),
    ThemeState::new(ThemeName::Everforest, ThemeVariant::Dark),
];

impl ThemeState {
    pub const fn new(theme: ThemeName, variant: ThemeVariant) -> Self {
        Self { theme, variant }
    }

    /// Resolve configured default names, substituting the built-in fallback
    /// for each name that is not recognised
    pub fn from_default_names(theme: &str, variant: &str) -> Self {
        let fallback = Self::default();
        Self {
            theme: theme.trim().parse().unwrap_or(fallback.theme),
            variant: variant.trim().parse().unwrap_or(fallback.variant),
        }
    }

    /// Defaults from `DEFAULT_THEME` / `DEFAULT_THEME_VARIANT`
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::from_default_names(&config.default_theme, &config.default_theme_variant)
    }

    /// Same theme with the opposite variant
    pub fn toggled(&self) -> Self {
        Self::new(self.theme, self.variant.toggled())
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ThemeName::RosePine, ThemeVariant::Dark)
    }
}

impl fmt::Display for ThemeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.theme, self.variant)
    }
}
