// tests/config_test.rs
use build_version::config::{load_config, Backend, Config};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert!(config.append_timestamp);
    assert_eq!(config.project_root, None);
    assert_eq!(config.backend, Backend::Command);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
append_timestamp = false
project_root = "/opt/project"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path())).unwrap();
    assert!(!config.append_timestamp);
    assert_eq!(config.project_root(), Path::new("/opt/project"));
    assert_eq!(config.backend, Backend::Command);
}

#[test]
fn test_load_fixture() {
    let config = load_config(Some(Path::new("tests/fixtures/no_timestamp.toml")))
        .expect("Failed to load test config");
    assert!(!config.append_timestamp);
    assert_eq!(config.backend, Backend::Git2);
}

#[test]
fn test_missing_file_is_error() {
    let result = load_config(Some(Path::new("tests/fixtures/does_not_exist.toml")));
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("I/O error"));
}

#[test]
fn test_invalid_toml_is_config_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"append_timestamp = \"sometimes\"").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path())).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}
