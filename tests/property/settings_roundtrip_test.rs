//! Property-based tests for BrowserSettings serialization round-trip.
//!
//! These tests verify that BrowserSettings can be serialized to JSON
//! and deserialized back without data loss for arbitrary valid inputs,
//! and that whatever the engine saves it loads back unchanged.

use foxbr::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use foxbr::types::settings::{BrowserSettings, ChromeSettings, GeneralSettings, WindowSettings};
use proptest::prelude::*;
use tempfile::TempDir;

fn arb_general_settings() -> impl Strategy<Value = GeneralSettings> {
    ("https://[a-z]{3,12}\\.[a-z]{2,3}", "https://[a-z]{3,12}\\.[a-z]{2,3}/\\?q=", "[a-zA-Z ]{0,30}").prop_map(
        |(home_url, search_url, url_placeholder)| GeneralSettings {
            home_url,
            search_url,
            url_placeholder,
        },
    )
}

fn arb_window_settings() -> impl Strategy<Value = WindowSettings> {
    (
        "[a-zA-Z ]{1,20}",
        -2000..4000i32,
        -2000..4000i32,
        (480..4000i32, 320..3000i32),
        (100..480i32, 100..320i32),
        40..200i32,
    )
        .prop_map(|(title, x, y, (width, height), (min_width, min_height), chrome_height)| WindowSettings {
            title,
            x,
            y,
            width,
            height,
            min_width,
            min_height,
            chrome_height,
        })
}

fn arb_chrome_settings() -> impl Strategy<Value = ChromeSettings> {
    (0..50i32, 0..20i32, 8..64u32, any::<bool>()).prop_map(
        |(drag_threshold, resize_margin, favicon_size, devtools)| ChromeSettings {
            drag_threshold,
            resize_margin,
            favicon_size,
            devtools,
        },
    )
}

fn arb_browser_settings() -> impl Strategy<Value = BrowserSettings> {
    (arb_general_settings(), arb_window_settings(), arb_chrome_settings()).prop_map(
        |(general, window, chrome)| BrowserSettings { general, window, chrome },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn settings_json_roundtrip(settings in arb_browser_settings()) {
        let json = serde_json::to_string(&settings).unwrap();
        let back: BrowserSettings = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, settings);
    }

    #[test]
    fn engine_save_load_roundtrip(settings in arb_browser_settings()) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json").to_string_lossy().to_string();
        std::fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();

        let mut engine = SettingsEngine::new(Some(path.clone()));
        prop_assert_eq!(engine.load().unwrap(), settings.clone());
        engine.save().unwrap();

        let mut reloaded = SettingsEngine::new(Some(path));
        prop_assert_eq!(reloaded.load().unwrap(), settings);
    }
}
