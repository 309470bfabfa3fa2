use repscount::config::Config;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(config.ui.haptics_enabled);
    assert!(config.ui.confirm_delete);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Unknown log level should fail
    config.logging.level = "verbose".to_string();
    assert!(config.validate().is_err());

    // Reset and test empty display formats
    config.logging.level = "debug".to_string();
    config.display.time_format = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("haptics_enabled = true"));
    assert!(toml_str.contains("level = \"info\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
confirm_delete = false

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();
    assert!(!config.ui.confirm_delete);
    assert!(config.ui.haptics_enabled, "untouched fields keep their defaults");
    assert!(config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_log_level_mapping() {
    let mut config = Config::default();
    config.logging.level = "warn".to_string();
    assert_eq!(config.log_level(), log::LevelFilter::Warn);
}
