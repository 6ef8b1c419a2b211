#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Configuration loading tests

use std::fs;

use lighthouse_core::config::{ENV_LANG, ENV_RESPONSE_LEVEL};
use lighthouse_core::logging_facility::Profile;
use lighthouse_core::{Level, LighthouseConfig, Registry};
use tempfile::TempDir;

#[test]
fn test_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lighthouse.toml");
    fs::write(
        &path,
        "profile = \"production\"\nlog_level = \"medium_debug\"\nresponse_level = \"high_user\"\n",
    )
    .unwrap();

    let config = LighthouseConfig::from_file(&path).unwrap();
    assert_eq!(config.profile, Profile::Production);
    assert_eq!(config.log_level, Level::MediumDebug);
    assert_eq!(config.response_level, Level::HighUser);
    assert_eq!(config.language, "en");
}

#[test]
fn test_from_file_rejects_unknown_level() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lighthouse.toml");
    fs::write(&path, "log_level = 200\n").unwrap();

    let err = LighthouseConfig::from_file(&path).unwrap_err();
    assert_eq!(err.code(), "ERR_CONFIG");
}

#[test]
fn test_config_drives_disclosure() {
    // GIVEN a config with a user-facing budget below the outer layer
    let config = LighthouseConfig::from_toml_str("response_level = \"low_user\"").unwrap();
    let config = config
        .with_overrides(|key| (key == ENV_LANG).then(|| "ru".to_string()))
        .unwrap();

    let registry = Registry::new();
    let err = lighthouse_core::helpers::internal(
        std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        "Failed to persist order",
        "Free some disk space",
    )
    .unwrap()
    .wrap_new(
        lighthouse_core::Sample::new("Order service failed")
            .with_message("en", "Could not place the order")
            .with_level(Level::MediumDebug),
    )
    .unwrap();

    // THEN the response shows the canonical Internal error in Russian
    let shown = err.spin(config.response_level, &registry).unwrap();
    assert_eq!(shown.message_or_english(&config.language), "Ошибка сервера");

    // AND the logs get the root cause
    let logged = err.spin(config.log_level, &registry).unwrap();
    assert_eq!(logged.description(), "Failed to persist order");
}

#[test]
fn test_invalid_response_level_override() {
    let err = LighthouseConfig::default()
        .with_overrides(|key| (key == ENV_RESPONSE_LEVEL).then(|| "everything".to_string()))
        .unwrap_err();
    assert_eq!(err.code(), "ERR_CONFIG");
}
