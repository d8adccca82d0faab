//! Layering of file, environment and defaults through `ConfigLoader`.

use std::io::Write;
use std::time::Duration;

use metcat_config::{ConfigLoadError, ConfigLoader, EnvConfig};
use tempfile::{NamedTempFile, TempDir};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp config");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

fn env(vars: &[(&str, &str)]) -> EnvConfig {
    let vars: Vec<(String, String)> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    EnvConfig::from_lookup(move |name| {
        vars.iter().find(|(k, _)| k == name).map(|(_, v)| v.clone())
    })
}

fn missing_env_file() -> std::path::PathBuf {
    TempDir::new().expect("temp dir").path().join("absent.env")
}

#[test]
fn defaults_apply_without_file_and_warn() {
    let load = ConfigLoader::new()
        .with_env_file(missing_env_file())
        .with_env(EnvConfig::default())
        .load()
        .expect("defaults load");

    let config = load.config;
    assert_eq!(
        config.api.base_url,
        "https://collectionapi.metmuseum.org/public/collection/v1"
    );
    assert_eq!(config.paging.page_size, 20);
    assert_eq!(config.paging.scroll_threshold, 200.0);
    assert_eq!(config.api.timeout, Duration::from_secs(30));
    assert!(config.metadata.config_path.is_none());
    assert!(!load.warnings.is_empty());
}

#[test]
fn file_values_are_used_and_env_overrides_them() {
    let file = write_config(
        r#"
[api]
base_url = "https://mirror.example/v1/"
timeout = "5s"

[paging]
page_size = 10
scroll_threshold = 120.0
"#,
    );

    let load = ConfigLoader::new()
        .with_config_path(file.path())
        .with_env_file(missing_env_file())
        .with_env(env(&[("METCAT_PAGE_SIZE", "25")]))
        .load()
        .expect("config loads");

    let config = load.config;
    assert_eq!(config.api.base_url, "https://mirror.example/v1");
    assert_eq!(config.api.timeout, Duration::from_secs(5));
    assert_eq!(config.paging.page_size, 25);
    assert_eq!(config.paging.scroll_threshold, 120.0);
    assert_eq!(config.metadata.config_path.as_deref(), Some(file.path()));
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let err = ConfigLoader::new()
        .with_config_path(dir.path().join("nope.toml"))
        .with_env_file(missing_env_file())
        .with_env(EnvConfig::default())
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::MissingConfig { .. }));
}

#[test]
fn env_config_path_must_exist_too() {
    let err = ConfigLoader::new()
        .with_env_file(missing_env_file())
        .with_env(env(&[("METCAT_CONFIG_PATH", "/definitely/not/here.toml")]))
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::MissingConfig { .. }));
}

#[test]
fn malformed_env_values_name_the_variable() {
    let err = ConfigLoader::new()
        .with_env_file(missing_env_file())
        .with_env(env(&[("METCAT_HTTP_TIMEOUT", "soon")]))
        .load()
        .unwrap_err();
    match err {
        ConfigLoadError::InvalidDuration { field, .. } => {
            assert_eq!(field, "METCAT_HTTP_TIMEOUT")
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let err = ConfigLoader::new()
        .with_env_file(missing_env_file())
        .with_env(env(&[("METCAT_PAGE_SIZE", "twenty")]))
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::InvalidNumber { .. }));
}

#[test]
fn zero_page_size_fails_guard_rails() {
    let err = ConfigLoader::new()
        .with_env_file(missing_env_file())
        .with_env(env(&[("METCAT_PAGE_SIZE", "0")]))
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::GuardRail(_)));
}

#[test]
fn parse_errors_carry_the_path() {
    let file = write_config("[paging]\npage_size = \"many\"\n");
    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .with_env_file(missing_env_file())
        .with_env(EnvConfig::default())
        .load()
        .unwrap_err();
    match err {
        ConfigLoadError::Parse { path, .. } => assert_eq!(path, file.path()),
        other => panic!("unexpected error: {other:?}"),
    }
}
