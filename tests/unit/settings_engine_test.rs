//! Integration-level unit tests for the SettingsEngine public API.
//!
//! These tests exercise the SettingsEngine through its public trait interface:
//! default loading, first-run initialization, dot-notation updates and
//! command-line overrides.

use tempfile::TempDir;

use foxbr::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use foxbr::types::errors::SettingsError;
use foxbr::types::settings::BrowserSettings;

/// Helper: create a SettingsEngine backed by a temp directory that lives for the
/// duration of the test (the caller holds the `TempDir` handle).
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    SettingsEngine::new(Some(path))
}

/// Without a config file the shell still starts with the built-in defaults.
#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(
        settings,
        BrowserSettings::default(),
        "Loading without a config file must return default settings"
    );
}

#[test]
fn test_default_values() {
    let settings = BrowserSettings::default();
    assert_eq!(settings.general.home_url, "https://www.google.com");
    assert_eq!(settings.general.search_url, "https://www.google.com/search?q=");
    assert_eq!(settings.chrome.drag_threshold, 5);
    assert_eq!(settings.chrome.favicon_size, 20);
    assert!(settings.window.min_width <= settings.window.width);
}

#[test]
fn test_load_or_init_creates_file() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    engine.load_or_init().unwrap();
    let content = std::fs::read_to_string(engine.get_config_path()).unwrap();
    let on_disk: BrowserSettings = serde_json::from_str(&content).unwrap();
    assert_eq!(on_disk, BrowserSettings::default());
}

#[test]
fn test_save_then_load_preserves_changes() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine
        .set_value("general.home_url", serde_json::json!("https://start.duckduckgo.com"))
        .unwrap();
    engine.set_value("window.width", serde_json::json!(1440)).unwrap();
    engine.save().unwrap();

    let mut reloaded = engine_in_temp(&dir);
    let settings = reloaded.load().unwrap();
    assert_eq!(settings.general.home_url, "https://start.duckduckgo.com");
    assert_eq!(settings.window.width, 1440);
}

#[test]
fn test_partial_file_fills_missing_fields() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    std::fs::write(engine.get_config_path(), r#"{"chrome":{"drag_threshold":9}}"#).unwrap();

    let settings = engine.load().unwrap();
    assert_eq!(settings.chrome.drag_threshold, 9);
    assert_eq!(settings.chrome.resize_margin, 6);
    assert_eq!(settings.window, BrowserSettings::default().window);
}

#[test]
fn test_set_value_unknown_key() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let err = engine.set_value("window.opacity", serde_json::json!(1)).unwrap_err();
    assert!(matches!(err, SettingsError::InvalidKey(_)));
    let err = engine.set_value("", serde_json::json!(1)).unwrap_err();
    assert!(matches!(err, SettingsError::InvalidKey(_)));
}

#[test]
fn test_set_value_wrong_type_leaves_settings_untouched() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let err = engine.set_value("window.width", serde_json::json!("wide")).unwrap_err();
    assert!(matches!(err, SettingsError::InvalidValue(_)));
    assert_eq!(engine.get_settings().window.width, 1024);
}

#[test]
fn test_overrides_then_into_settings() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.apply_override("chrome.devtools=true").unwrap();
    engine.apply_override("general.url_placeholder=Where to?").unwrap();

    let settings = engine.into_settings();
    assert!(settings.chrome.devtools);
    assert_eq!(settings.general.url_placeholder, "Where to?");
}
