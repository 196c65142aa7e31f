//! Theme store
//!
//! Created explicitly with [`ThemeStore::initialize`] and handed to whatever
//! needs to read or change the theme. All side effects of a change run
//! through listeners, so every mutation path triggers them the same way.

use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc,
};

use dashtools_storage::KeyValueStore;
use parking_lot::{Mutex, ReentrantMutex};

use crate::{
    error::{Result, ThemeError},
    listener::{PersistenceListener, PresentationListener, ThemeChange, ThemeListener},
    persisted::{self, STORAGE_KEY},
    presentation::{self, PresentationContext},
    types::{ThemeName, ThemeState, ThemeVariant, THEMES},
};

/// Handle returned by [`ThemeStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listeners = Vec<(SubscriptionId, Arc<dyn ThemeListener>)>;

/// Active theme plus its change listeners
pub struct ThemeStore {
    state: Mutex<ThemeState>,
    /// Held from the state swap until every listener has run, so changes
    /// reach listeners in the order they were made
    change_lock: ReentrantMutex<()>,
    listeners: Mutex<Listeners>,
    next_id: AtomicU64,
    disposed: AtomicBool,
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("state", &*self.state.lock())
            .field("listeners", &self.listeners.lock().len())
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

impl ThemeStore {
    /// Restore the theme and wire up presentation and persistence
    ///
    /// The restored state is applied to `presentation` before this returns.
    /// Storage is only read here; it is written on the first change.
    pub fn initialize(
        storage: Arc<dyn KeyValueStore>,
        presentation: Arc<dyn PresentationContext>,
        defaults: ThemeState,
    ) -> Self {
        let state = Self::load(storage.as_ref(), defaults);
        presentation::apply(presentation.as_ref(), &state);
        tracing::info!("Initialized theme {}", state);

        let store = Self::with_state(state);
        store.subscribe(PresentationListener::new(presentation));
        store.subscribe(PersistenceListener::new(storage));
        store
    }

    /// A store with no listeners, starting at `state`
    pub fn with_state(state: ThemeState) -> Self {
        Self {
            state: Mutex::new(state),
            change_lock: ReentrantMutex::new(()),
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
            disposed: AtomicBool::new(false),
        }
    }

    /// Read the persisted state, or `defaults` when absent or unusable
    pub fn load(storage: &dyn KeyValueStore, defaults: ThemeState) -> ThemeState {
        let raw = match storage.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return defaults,
            Err(e) => {
                tracing::warn!("Failed to read saved theme: {}", e);
                return defaults;
            }
        };

        match persisted::decode(&raw, defaults) {
            Ok(state) => state,
            Err(ThemeError::Malformed(e)) => {
                tracing::warn!("Failed to load theme from storage: {}", e);
                defaults
            }
            Err(e) => {
                tracing::warn!("Ignoring saved theme: {}", e);
                defaults
            }
        }
    }

    pub fn current(&self) -> ThemeState {
        *self.state.lock()
    }

    pub fn theme(&self) -> ThemeName {
        self.current().theme
    }

    pub fn variant(&self) -> ThemeVariant {
        self.current().variant
    }

    /// Every selectable theme/variant pair
    pub fn available_themes(&self) -> &'static [ThemeState] {
        &THEMES
    }

    /// Switch theme; returns whether anything changed
    pub fn set_theme(&self, theme: ThemeName, variant: ThemeVariant) -> Result<bool> {
        self.set_state(ThemeState::new(theme, variant))
    }

    /// Switch theme by name, rejecting names that are not known
    pub fn set_theme_by_name(&self, theme: &str, variant: &str) -> Result<bool> {
        self.set_theme(theme.parse()?, variant.parse()?)
    }

    /// Flip between light and dark of the current theme
    pub fn toggle_variant(&self) -> Result<bool> {
        let next = self.current().toggled();
        self.set_state(next)
    }

    /// Replace the state and notify listeners when it differs
    pub fn set_state(&self, next: ThemeState) -> Result<bool> {
        let _change = self.change_lock.lock();
        if self.is_disposed() {
            return Err(ThemeError::Disposed);
        }

        let previous = {
            let mut state = self.state.lock();
            let previous = *state;
            if previous == next {
                return Ok(false);
            }
            *state = next;
            previous
        };

        tracing::info!("Theme changed from {} to {}", previous, next);
        self.notify(&ThemeChange {
            previous,
            current: next,
        });
        Ok(true)
    }

    /// Register a listener for theme changes
    pub fn subscribe<L>(&self, listener: L) -> SubscriptionId
    where
        L: ThemeListener + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener; returns whether it was registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }

    /// Drop all listeners; later changes are refused
    pub fn dispose(&self) {
        if !self.disposed.swap(true, Ordering::SeqCst) {
            self.listeners.lock().clear();
            tracing::debug!("Theme store disposed");
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    fn notify(&self, change: &ThemeChange) {
        // Snapshot so listeners may read or change the store themselves.
        let listeners: Vec<_> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener.on_theme_changed(change);
        }
    }
}
