use std::fs;

use mailstart::config::{Config, ConfigError};

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config.ui.tick_rate_ms, 50);
    assert_eq!(config.ui.content_max_width, 80);
}

#[test]
fn file_values_are_applied() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[ui]\ntick_rate_ms = 100\ncontent_max_width = 60\n\n\
         [permissions]\nnotifications_supported = false\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.ui.content_max_width, 60);
    assert_eq!(config.permissions.notifications_supported, Some(false));
}

#[test]
fn parse_error_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "not { valid").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    match err {
        ConfigError::ParseError { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn out_of_range_tick_rate_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui]\ntick_rate_ms = 5\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn too_narrow_content_width_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui]\ncontent_max_width = 20\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}
