//! Configuration file loading and saving.

use nameguard::config::{load_config_from, save_config_to, AppConfig};

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = AppConfig::default();
    config.messages.unreadable = "Try a name people can pronounce.".to_string();
    config.registration.check_username = false;
    config.logging.level = "nameguard=debug".to_string();

    save_config_to(&config, &path).unwrap();
    assert_eq!(load_config_from(&path).unwrap(), config);
}

#[test]
fn test_invalid_toml_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[messages\nsuspicious = ").unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));
}

#[test]
fn test_unreadable_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    // A directory exists at the path but can't be read as a file.
    let err = load_config_from(dir.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read config"));
}
