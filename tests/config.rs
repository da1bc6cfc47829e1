//! Configuration system tests
//!
//! Tests for config paths and viewer config loading/saving.

use std::path::PathBuf;

use panelview::config::ViewerConfig;
use panelview::config_paths;
use tempfile::TempDir;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("panelview"));
}

#[test]
fn test_config_file_ends_with_yaml() {
    let path = config_paths::config_file().unwrap();
    assert!(path.to_string_lossy().ends_with("config.yaml"));
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    let config = config_paths::config_dir().unwrap();
    let logs = config_paths::logs_dir().unwrap();
    assert!(logs.starts_with(&config));
}

// ========================================================================
// Viewer Config Tests
// ========================================================================

#[test]
fn test_default_config() {
    let config = ViewerConfig::default();
    assert_eq!(config.layout_file, PathBuf::from("layout.txt"));
    assert!(!config.restore_layout);
    assert_eq!((config.window_width, config.window_height), (1280, 800));
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.yaml");
    let config = ViewerConfig {
        layout_file: PathBuf::from("/tmp/my-layout.txt"),
        restore_layout: true,
        window_width: 1920,
        window_height: 1080,
    };

    config.save_to(&path).unwrap();
    assert_eq!(ViewerConfig::load_from(&path), config);
}

#[test]
fn test_missing_fields_use_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "restore_layout: true\n").unwrap();

    let config = ViewerConfig::load_from(&path);
    assert!(config.restore_layout);
    assert_eq!(config.layout_file, PathBuf::from("layout.txt"));
    assert_eq!(config.window_width, 1280);
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = ViewerConfig::load_from(&dir.path().join("absent.yaml"));
    assert_eq!(config, ViewerConfig::default());
}

#[test]
fn test_invalid_yaml_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "window_width: [not, a, number]\n").unwrap();

    assert_eq!(ViewerConfig::load_from(&path), ViewerConfig::default());
}

#[test]
fn test_logs_dir_named_logs() {
    let logs = config_paths::logs_dir().unwrap();
    assert_eq!(logs.file_name().unwrap(), "logs");
    assert_eq!(logs.parent().unwrap().file_name().unwrap(), "panelview");
}
