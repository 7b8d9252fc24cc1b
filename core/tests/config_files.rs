// core/tests/config_files.rs
//
// Integration tests for loading and saving Config as TOML files.

use morsetouch_core::{Config, MorseError};
use tempfile::tempdir;

#[test]
fn test_save_then_load_preserves_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("morsetouch.toml");

    let mut config = Config {
        double_tap_window_ms: 250,
        welcome: Some("login page".to_string()),
        ..Config::default()
    };
    config.phrases.submit_question = "submit now?".to_string();
    config.save_toml(&path).unwrap();

    let loaded = Config::load_toml(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_default_config_saves_without_welcome() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("default.toml");

    Config::default().save_toml(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(!text.contains("welcome"));
    assert_eq!(Config::load_toml(&path).unwrap(), Config::default());
}

#[test]
fn test_partial_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("partial.toml");
    std::fs::write(&path, "show_result_view = false\n\n[phrases]\nempty = \"nothing\"\n").unwrap();

    let config = Config::load_toml(&path).unwrap();
    assert!(!config.show_result_view);
    assert_eq!(config.phrases.empty, "nothing");
    assert_eq!(config.phrases.open_menu, "open menu");
    assert_eq!(config.double_tap_window_ms, 300);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = Config::load_toml(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, MorseError::Io(_)));
}
