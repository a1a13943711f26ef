//! Integration tests for configuration persistence.

use fourpillars_core::{Config, ConfigError, CoreError, Stem};

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = Config::load_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(cfg, Config::default());
    // loading does not create the file
    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut cfg = Config::default();
    cfg.set("luck.start_age", "7").unwrap();
    cfg.set("highlight.beneficial.stems", r#"["壬"]"#).unwrap();
    cfg.set("highlight.beneficial.elements", r#"["water"]"#).unwrap();
    cfg.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, cfg);
    assert_eq!(loaded.luck.start_age, 7);
    assert_eq!(loaded.highlight.beneficial.stems, vec![Stem::Ren]);

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("start_age = 7"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[luck\nstart_age = ").unwrap();
    assert!(matches!(
        Config::load_from(&path),
        Err(CoreError::Config(ConfigError::ParseFailed(_)))
    ));
}

#[test]
fn test_wrong_type_in_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[luck]\nstart_age = \"three\"\n").unwrap();
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_out_of_range_start_age_in_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[luck]\nstart_age = 4294967295\n").unwrap();
    assert!(matches!(
        Config::load_from(&path),
        Err(CoreError::Config(ConfigError::InvalidValue { .. }))
    ));
}
