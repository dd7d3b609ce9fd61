//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

fn write_temp_config(name: &str, contents: &str) -> PathBuf {
    let dir = env::temp_dir().join("ecoleta_config_tests");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn default_config_path_contains_ecoleta_config_toml() {
    let Some(path) = default_config_path() else {
        return;
    };
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("ecoleta") && path_str.ends_with("config.toml"),
        "got: {}",
        path_str
    );
}

#[test]
fn default_log_path_ends_with_ecoleta_log() {
    let path = default_log_path();
    assert!(path.to_string_lossy().ends_with("ecoleta.log"), "got: {:?}", path);
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/ecoleta.toml");
    assert_eq!(result, Ok(None));
}

#[test]
fn load_config_file_parses_valid_toml() {
    let path = write_temp_config(
        "valid.toml",
        r#"
backend_url = "https://api.example.com"
request_timeout_secs = 5
suppressed_warnings = ["Failed to fetch estados"]
"#,
    );

    let config = load_config_file(&path).unwrap().unwrap();
    assert_eq!(config.backend_url.as_deref(), Some("https://api.example.com"));
    assert_eq!(config.request_timeout_secs, Some(5));
    assert_eq!(
        config.suppressed_warnings,
        Some(vec!["Failed to fetch estados".to_string()])
    );
    assert_eq!(config.geo_api_url, None);
}

#[test]
fn load_config_file_rejects_unknown_keys() {
    let path = write_temp_config("unknown.toml", "colour_scheme = \"green\"\n");

    let result = load_config_file(&path);
    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "got: {:?}",
        result
    );
}

#[test]
fn load_config_file_rejects_invalid_toml() {
    let path = write_temp_config("invalid.toml", "backend_url = [unterminated\n");

    let result = load_config_file(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn load_config_file_reports_read_error_for_directory() {
    let dir = env::temp_dir().join("ecoleta_config_tests_dir.toml");
    fs::create_dir_all(&dir).unwrap();

    let result = load_config_file(&dir);
    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}

#[test]
fn merge_config_without_file_uses_defaults() {
    let resolved = merge_config(None);
    assert_eq!(resolved, ResolvedConfig::default());
    assert_eq!(resolved.geo_api_url, DEFAULT_GEO_API_URL);
    assert_eq!(resolved.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(resolved.request_timeout, Duration::from_secs(30));
    assert!(resolved.suppressed_warnings.is_empty());
}

#[test]
fn merge_config_prefers_file_values() {
    let file = ConfigFile {
        backend_url: Some("http://10.0.2.2:3333".to_string()),
        request_timeout_secs: Some(3),
        log_file_path: Some(PathBuf::from("/tmp/ecoleta/custom.log")),
        suppressed_warnings: Some(vec!["a".to_string(), "b".to_string(), "a".to_string()]),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(file));
    assert_eq!(resolved.backend_url, "http://10.0.2.2:3333");
    assert_eq!(resolved.geo_api_url, DEFAULT_GEO_API_URL);
    assert_eq!(resolved.request_timeout, Duration::from_secs(3));
    assert_eq!(resolved.log_file_path, PathBuf::from("/tmp/ecoleta/custom.log"));
    assert_eq!(resolved.suppressed_warnings.len(), 2);
}

#[test]
#[serial(ecoleta_env)]
fn env_backend_url_overrides_file() {
    env::set_var("ECOLETA_BACKEND_URL", "http://from-env:3333");
    let resolved = apply_env_overrides(merge_config(None));
    env::remove_var("ECOLETA_BACKEND_URL");

    assert_eq!(resolved.backend_url, "http://from-env:3333");
}

#[test]
#[serial(ecoleta_env)]
fn env_config_path_is_used_when_no_explicit_path() {
    let path = write_temp_config("from_env.toml", "backend_url = \"http://env-file\"\n");
    env::set_var("ECOLETA_CONFIG", &path);
    let loaded = load_config_with_precedence(None);
    env::remove_var("ECOLETA_CONFIG");

    let config = loaded.unwrap().unwrap();
    assert_eq!(config.backend_url.as_deref(), Some("http://env-file"));
}

#[test]
#[serial(ecoleta_env)]
fn explicit_path_beats_env_config_path() {
    let explicit = write_temp_config("explicit.toml", "backend_url = \"http://explicit\"\n");
    let from_env = write_temp_config("ignored.toml", "backend_url = \"http://ignored\"\n");
    env::set_var("ECOLETA_CONFIG", &from_env);
    let loaded = load_config_with_precedence(Some(explicit));
    env::remove_var("ECOLETA_CONFIG");

    let config = loaded.unwrap().unwrap();
    assert_eq!(config.backend_url.as_deref(), Some("http://explicit"));
}

#[test]
fn cli_override_wins_over_everything() {
    let file = ConfigFile {
        backend_url: Some("http://file".to_string()),
        ..ConfigFile::default()
    };
    let resolved = apply_cli_overrides(merge_config(Some(file)), Some("http://cli".to_string()));
    assert_eq!(resolved.backend_url, "http://cli");
}

#[test]
fn cli_override_absent_keeps_value() {
    let resolved = apply_cli_overrides(ResolvedConfig::default(), None);
    assert_eq!(resolved.backend_url, DEFAULT_BACKEND_URL);
}
