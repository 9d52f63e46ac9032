use super::*;
use std::error::Error;

#[test]
fn test_template_error_display() {
    let err = HumaneError::template("unknown escape '%x'", "%x ago");

    assert!(matches!(err, HumaneError::Template { .. }));
    assert!(err.to_string().contains("unknown escape"));
    assert!(err.to_string().contains("%x ago"));
}

#[test]
fn test_parse_error_display() {
    let err = HumaneError::parse("not a number", "12a");

    assert!(matches!(err, HumaneError::Parse { .. }));
    assert!(err.to_string().contains("12a"));
    assert!(err.to_string().contains("not a number"));
    assert!(err.source().is_none());
}

#[test]
fn test_parse_error_with_source() {
    let source = "abc".parse::<i64>().unwrap_err();
    let err = HumaneError::parse_with_source("not an integer", "abc", source);

    assert!(err.source().is_some());
}

#[test]
fn test_config_error_with_path() {
    let err = HumaneError::config("missing labels section", Some("/etc/humane.yaml"));

    match err {
        HumaneError::Config { path, source, .. } => {
            assert_eq!(path.as_deref(), Some("/etc/humane.yaml"));
            assert!(source.is_none());
        }
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_config_error_with_source() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err = HumaneError::config_with_source("failed to read config", None, io_err);

    assert!(err.to_string().starts_with("Configuration error"));
    assert!(err.source().unwrap().to_string().contains("file not found"));
}

#[test]
fn test_from_config_error() {
    let cfg_err = config::ConfigError::Message("bad value".to_string());
    let err: HumaneError = cfg_err.into();

    match &err {
        HumaneError::Config { message, path, .. } => {
            assert_eq!(message, "Failed to build configuration");
            assert!(path.is_none());
        }
        _ => panic!("Expected Config error"),
    }
    assert!(err.source().unwrap().to_string().contains("bad value"));
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HumaneError>();
}
