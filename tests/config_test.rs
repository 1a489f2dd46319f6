//! Tests for AppConfig loading.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use noughts::AppConfig;
use noughts_core::Mode;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("noughts.toml");
    fs::write(&path, content).expect("Failed to write TOML");
    path
}

#[test]
fn test_full_config_loads() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        r#"mode = "human_vs_automated"
log_file = "/tmp/noughts-test.log"
log_filter = "noughts_core=debug"
"#,
    );

    let config = AppConfig::from_file(&path).expect("Load failed");
    assert_eq!(*config.mode(), Mode::HumanVsAutomated);
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/noughts-test.log"));
    assert_eq!(config.log_filter(), "noughts_core=debug");
}

#[test]
fn test_missing_keys_use_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "");

    let config = AppConfig::from_file(&path).expect("Load failed");
    assert_eq!(config, AppConfig::default());
    assert_eq!(*config.mode(), Mode::HumanVsHuman);
    assert_eq!(config.log_file(), &PathBuf::from("noughts.log"));
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("absent.toml");

    let config = AppConfig::load_or_default(&path).expect("Fallback failed");
    assert_eq!(config, AppConfig::default());
    assert!(AppConfig::from_file(&path).is_err());
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, r#"mode = "robot""#);

    let err = AppConfig::load_or_default(&path).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_flag_overrides_file_mode() {
    let config = AppConfig::default().with_mode(Mode::HumanVsAutomated);
    assert_eq!(*config.mode(), Mode::HumanVsAutomated);
    assert_eq!(config.log_filter(), "info");
}
