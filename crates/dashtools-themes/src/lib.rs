//! DashTools Theme Management
//!
//! Holds the active theme and variant, restores them from storage on startup,
//! and pushes every change to the presentation layer and back to storage
//! through change listeners.

pub mod error;
pub mod listener;
pub mod persisted;
pub mod presentation;
pub mod store;
pub mod types;

pub use error::{Result, ThemeError};
pub use listener::{PersistenceListener, PresentationListener, ThemeChange, ThemeListener};
pub use persisted::STORAGE_KEY;
pub use presentation::{DocumentRoot, PresentationContext, THEME_ATTRIBUTE, VARIANT_ATTRIBUTE};
pub use store::{SubscriptionId, ThemeStore};
pub use types::{ThemeName, ThemeState, ThemeVariant, THEMES};
