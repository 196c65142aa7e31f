use std::sync::Arc;

use dashtools_config::ConfigManager;
use dashtools_storage::{JsonFileStore, KeyValueStore, MemoryStore};
use dashtools_themes::*;
use proptest::prelude::*;

fn arb_state() -> impl Strategy<Value = ThemeState> {
    (0..THEMES.len()).prop_map(|i| THEMES[i])
}

fn initialize(storage: Arc<dyn KeyValueStore>, defaults: ThemeState) -> (Arc<DocumentRoot>, ThemeStore) {
    let root = Arc::new(DocumentRoot::new());
    let store = ThemeStore::initialize(storage, root.clone(), defaults);
    (root, store)
}

proptest! {
    #[test]
    fn prop_valid_record_is_restored(saved in arb_state(), defaults in arb_state()) {
        let raw = serde_json::to_string(&saved).unwrap();
        let storage = Arc::new(MemoryStore::with_items([(STORAGE_KEY, raw)]));
        let (_, store) = initialize(storage, defaults);
        prop_assert_eq!(store.current(), saved);
    }

    #[test]
    fn prop_garbage_yields_defaults(raw in "\\PC*", defaults in arb_state()) {
        prop_assume!(serde_json::from_str::<serde_json::Value>(&raw)
            .map(|v| !v.is_object())
            .unwrap_or(true));
        let storage = Arc::new(MemoryStore::with_items([(STORAGE_KEY, raw)]));
        let (_, store) = initialize(storage, defaults);
        prop_assert_eq!(store.current(), defaults);
    }

    #[test]
    fn prop_unknown_names_yield_defaults(theme in "[a-z-]{1,12}", variant in "[a-z]{1,8}", defaults in arb_state()) {
        prop_assume!(theme.parse::<ThemeName>().is_err() || variant.parse::<ThemeVariant>().is_err());
        let raw = serde_json::json!({ "theme": theme, "variant": variant }).to_string();
        let storage = Arc::new(MemoryStore::with_items([(STORAGE_KEY, raw)]));
        let (_, store) = initialize(storage, defaults);
        prop_assert_eq!(store.current(), defaults);
    }

    #[test]
    fn prop_set_theme_survives_reload(target in arb_state(), defaults in arb_state()) {
        let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let (_, store) = initialize(storage.clone(), defaults);
        store.set_state(target).unwrap();
        store.dispose();

        let (root, reloaded) = initialize(storage, defaults);
        prop_assert_eq!(reloaded.current(), target);
        prop_assert_eq!(root.attribute(THEME_ATTRIBUTE), Some(target.theme.to_string()));
        prop_assert_eq!(root.attribute(VARIANT_ATTRIBUTE), Some(target.variant.to_string()));
    }
}

#[test]
fn test_environment_defaults_applied_before_first_render() {
    let config = ConfigManager::from_vars([
        ("DEFAULT_THEME", "everforest"),
        ("DEFAULT_THEME_VARIANT", "light"),
    ])
    .load_config()
    .unwrap();

    let (root, store) = initialize(Arc::new(MemoryStore::new()), ThemeState::from_config(&config));
    assert_eq!(
        store.current(),
        ThemeState::new(ThemeName::Everforest, ThemeVariant::Light)
    );
    assert_eq!(root.attribute(THEME_ATTRIBUTE).as_deref(), Some("everforest"));
    assert_eq!(root.attribute(VARIANT_ATTRIBUTE).as_deref(), Some("light"));
}

#[test]
fn test_invalid_configured_defaults_use_builtin_pair() {
    let config = ConfigManager::from_vars([
        ("DEFAULT_THEME", "solarized"),
        ("DEFAULT_THEME_VARIANT", "sepia"),
    ])
    .load_config()
    .unwrap();

    let (_, store) = initialize(Arc::new(MemoryStore::new()), ThemeState::from_config(&config));
    assert_eq!(store.current(), ThemeState::default());
}

#[test]
fn test_file_storage_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let (_, store) = initialize(Arc::new(JsonFileStore::new(&path)), ThemeState::default());
    store.set_theme(ThemeName::Everforest, ThemeVariant::Dark).unwrap();

    let (_, reloaded) = initialize(Arc::new(JsonFileStore::new(&path)), ThemeState::default());
    assert_eq!(
        reloaded.current(),
        ThemeState::new(ThemeName::Everforest, ThemeVariant::Dark)
    );
}

#[test]
fn test_choice_saved_over_corrupt_storage_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "{truncated").unwrap();

    let (_, store) = initialize(Arc::new(JsonFileStore::new(&path)), ThemeState::default());
    assert_eq!(store.current(), ThemeState::default());
    store.set_theme(ThemeName::Everforest, ThemeVariant::Light).unwrap();

    let (_, reloaded) = initialize(Arc::new(JsonFileStore::new(&path)), ThemeState::default());
    assert_eq!(
        reloaded.current(),
        ThemeState::new(ThemeName::Everforest, ThemeVariant::Light)
    );
}

#[test]
fn test_storage_clear_forgets_theme() {
    let storage = Arc::new(MemoryStore::new());
    let (_, store) = initialize(storage.clone(), ThemeState::default());
    store.set_theme(ThemeName::Everforest, ThemeVariant::Light).unwrap();

    storage.clear().unwrap();
    let (_, reloaded) = initialize(storage, ThemeState::default());
    assert_eq!(reloaded.current(), ThemeState::default());
}

struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get_item(&self, _key: &str) -> dashtools_storage::StorageResult<Option<String>> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> dashtools_storage::StorageResult<()> {
        Err(dashtools_storage::StorageError::Unavailable("read-only".to_string()))
    }

    fn remove_item(&self, _key: &str) -> dashtools_storage::StorageResult<()> {
        Ok(())
    }

    fn clear(&self) -> dashtools_storage::StorageResult<()> {
        Ok(())
    }
}

#[test]
fn test_persistence_failure_does_not_fail_set_theme() {
    let (root, store) = initialize(Arc::new(ReadOnlyStore), ThemeState::default());
    assert!(store.set_theme(ThemeName::Everforest, ThemeVariant::Light).unwrap());
    assert_eq!(root.attribute(THEME_ATTRIBUTE).as_deref(), Some("everforest"));
}
