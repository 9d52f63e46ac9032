use super::*;
use libhumane::config::OutputFormat;
use std::fs;

#[test]
fn test_config_path_file_name() {
    let path = get_config_path();
    assert!(path.to_string_lossy().ends_with(".yaml"));
}

#[test]
fn test_load_or_default_without_path() {
    assert_eq!(load_or_default(None), Config::default());
}

#[test]
fn test_load_or_default_missing_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("config.yaml");

    assert_eq!(load_or_default(Some(config_path.as_path())), Config::default());
}

#[test]
fn test_load_or_default_reads_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(&config_path, "labels:\n  past: back\noutput:\n  format: json\n").unwrap();

    let config = load_or_default(Some(config_path.as_path()));
    assert_eq!(config.labels.past, "back");
    assert_eq!(config.labels.future, "from now");
    assert_eq!(config.output.format, OutputFormat::Json);
}

#[test]
fn test_load_or_default_invalid_file_falls_back() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(&config_path, "output:\n  format: xml\n").unwrap();

    assert_eq!(load_or_default(Some(config_path.as_path())), Config::default());
}
