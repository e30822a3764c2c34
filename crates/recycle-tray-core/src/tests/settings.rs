use crate::{Settings, SettingsStore, TrayError};

use std::fs;

/// WHAT: A missing settings file yields the defaults
/// WHY: First launch must work without any setup
#[test]
#[allow(clippy::unwrap_used)]
fn given_no_file_when_loading_then_defaults() {
    // Given: A store pointing at a file that does not exist
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::new(dir.path().join("settings.toml"));

    // When: Loading
    let settings = store.load().unwrap();

    // Then: Notifications on, default theme
    assert!(settings.show_notifications);
    assert_eq!(settings.icon_set, "default");
}

/// WHAT: Saved settings are read back unchanged
/// WHY: Menu toggles must survive a restart
#[test]
#[allow(clippy::unwrap_used)]
fn given_saved_settings_when_loading_then_same_values() {
    // Given: Non-default settings saved to disk
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::new(dir.path().join("settings.toml"));
    let saved = Settings {
        show_notifications: false,
        icon_set: "dark".to_string(),
    };
    store.save(&saved).unwrap();

    // When: Loading through a fresh store
    let loaded = SettingsStore::new(store.path()).load().unwrap();

    // Then: Values match and no temp file is left behind
    assert_eq!(loaded, saved);
    assert!(!dir.path().join("settings.toml.tmp").exists());
}

/// WHAT: Keys absent from the file take their defaults
/// WHY: Older or hand-edited files must still load
#[test]
#[allow(clippy::unwrap_used)]
fn given_partial_file_when_loading_then_missing_keys_default() {
    // Given: A file with only icon_set
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "icon_set = \"retro\"\n").unwrap();

    // When: Loading
    let settings = SettingsStore::new(&path).load().unwrap();

    // Then: show_notifications falls back to true
    assert!(settings.show_notifications);
    assert_eq!(settings.icon_set, "retro");
}

/// WHAT: A corrupt file is reported as a ConfigError
/// WHY: The caller decides whether to fall back to defaults
#[test]
#[allow(clippy::unwrap_used)]
fn given_corrupt_file_when_loading_then_config_error() {
    // Given: A file that is not TOML
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "show_notifications = [[").unwrap();

    // When/Then: Loading fails with ConfigError
    assert!(matches!(
        SettingsStore::new(&path).load(),
        Err(TrayError::ConfigError { .. })
    ));
}
