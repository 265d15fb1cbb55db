//! Configuration loading from TOML files and environment overrides.

use songdeck_catalog::CatalogStrategy;
use songdeck_cli::{AppConfig, CliError};
use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

fn toml_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write config");
    file
}

fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
    Some(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

#[test]
fn loads_sections_from_file() {
    let file = toml_file(
        r#"
        [catalog]
        base_url = "https://music.example.com"
        strategy = "manifest"
        manifest_path = "library/manifest.json"

        [playback]
        initial_volume = 0.5
        default_album = "Lofi"
        "#,
    );

    let config = AppConfig::load_with_env(Some(file.path()), env(&[])).unwrap();
    assert_eq!(config.catalog.base_url, "https://music.example.com");
    assert_eq!(config.catalog.strategy, CatalogStrategy::Manifest);
    assert_eq!(config.catalog.manifest_path, "library/manifest.json");
    assert_eq!(config.catalog.root, "songs");
    assert_eq!(config.playback.initial_volume, 0.5);
    assert_eq!(config.playback.default_album, "Lofi");
    assert!(!config.playback.auto_advance);
    assert!(config.validate().is_ok());
}

#[test]
fn environment_overrides_file() {
    let file = toml_file(
        r#"
        [catalog]
        base_url = "https://music.example.com"
        "#,
    );

    let config = AppConfig::load_with_env(
        Some(file.path()),
        env(&[
            ("SONGDECK_CATALOG__BASE_URL", "http://localhost:9000"),
            ("SONGDECK_CATALOG__PLAYABLE_EXTENSIONS", "mp3,ogg"),
            ("SONGDECK_PLAYBACK__AUTO_ADVANCE", "true"),
        ]),
    )
    .unwrap();

    assert_eq!(config.catalog.base_url, "http://localhost:9000");
    assert_eq!(config.catalog.playable_extensions, vec!["mp3", "ogg"]);
    assert!(config.playback.auto_advance);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let result = AppConfig::load_with_env(Some(path.as_path()), env(&[]));
    assert!(matches!(result, Err(CliError::Config(_))));
}

#[test]
fn malformed_file_is_an_error() {
    let file = toml_file("[catalog\nbase_url = ");
    assert!(AppConfig::load_with_env(Some(file.path()), env(&[])).is_err());
}

#[test]
fn invalid_values_fail_validation() {
    let file = toml_file(
        r#"
        [catalog]
        base_url = "not a url"
        "#,
    );

    let config = AppConfig::load_with_env(Some(file.path()), env(&[])).unwrap();
    assert!(matches!(config.validate(), Err(CliError::Config(_))));
}
