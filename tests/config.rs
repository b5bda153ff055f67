use redditpains::config::Config;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.ui.icon_theme, "unicode");
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Unknown icon theme should fail
    config.ui.icon_theme = "nerdfont".to_string();
    assert!(config.validate().is_err());

    config.ui.icon_theme = "ascii".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("mouse_enabled = true"));
    assert!(toml_str.contains("icon_theme = \"unicode\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert!(config.logging.enabled);

    // Unspecified values use defaults
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.ui.icon_theme, "unicode");
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.mouse_enabled, default_config.ui.mouse_enabled);
    assert_eq!(config.ui.icon_theme, default_config.ui.icon_theme);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("redditpains_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());
    assert!(config_path.exists());

    // The generated file round-trips through the loader
    let loaded = Config::load_from_file(&config_path).unwrap();
    assert!(loaded.ui.mouse_enabled);

    let _ = fs::remove_dir_all(&temp_dir);
}
