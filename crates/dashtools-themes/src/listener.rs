//! Theme change listeners

use std::sync::Arc;

use dashtools_storage::KeyValueStore;

use crate::{
    error::Result,
    persisted::{self, STORAGE_KEY},
    presentation::{self, PresentationContext},
    types::ThemeState,
};

/// Emitted once for every effective theme change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeChange {
    pub previous: ThemeState,
    pub current: ThemeState,
}

/// Observer of theme changes
///
/// Listeners run synchronously, in subscription order, after the new state is
/// visible through [`crate::ThemeStore::current`].
pub trait ThemeListener: Send + Sync {
    fn on_theme_changed(&self, change: &ThemeChange);
}

impl<F> ThemeListener for F
where
    F: Fn(&ThemeChange) + Send + Sync,
{
    fn on_theme_changed(&self, change: &ThemeChange) {
        self(change)
    }
}

/// Reapplies presentation attributes on change
pub struct PresentationListener {
    context: Arc<dyn PresentationContext>,
}

impl PresentationListener {
    pub fn new(context: Arc<dyn PresentationContext>) -> Self {
        Self { context }
    }
}

impl ThemeListener for PresentationListener {
    fn on_theme_changed(&self, change: &ThemeChange) {
        presentation::apply(self.context.as_ref(), &change.current);
    }
}

/// Writes the new state to storage on change
pub struct PersistenceListener {
    storage: Arc<dyn KeyValueStore>,
}

impl PersistenceListener {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Write `state` under [`STORAGE_KEY`]
    pub fn persist(&self, state: &ThemeState) -> Result<()> {
        let raw = persisted::encode(state)?;
        self.storage.set_item(STORAGE_KEY, &raw)?;
        Ok(())
    }
}

impl ThemeListener for PersistenceListener {
    fn on_theme_changed(&self, change: &ThemeChange) {
        if let Err(e) = self.persist(&change.current) {
            tracing::warn!("Failed to persist theme {}: {}", change.current, e);
        }
    }
}
