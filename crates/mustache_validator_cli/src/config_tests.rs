use super::*;
use mustache_validator::{MissingPropertyPolicy, DEFAULT_MAX_DEPTH};
use tempfile::TempDir;

#[test]
fn test_app_config_default() {
    let config = AppConfig::default();

    assert_eq!(config.validator.max_depth, DEFAULT_MAX_DEPTH);
    assert_eq!(config.validator.on_missing, MissingPropertyPolicy::Fail);
}

#[test]
fn test_app_config_load_invalid_toml() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("invalid_config.toml");

    fs::write(&config_path, "invalid = toml = syntax").expect("Failed to write invalid TOML");

    let result = AppConfig::load(&config_path);

    if let Err(Error::Config(msg)) = result {
        assert!(msg.contains("Failed to parse configuration file"));
    } else {
        panic!("Expected Config error");
    }
}

#[test]
fn test_app_config_load_nonexistent_file() {
    let nonexistent_path = PathBuf::from("nonexistent_config.toml");
    let result = AppConfig::load(&nonexistent_path);

    if let Err(Error::Config(msg)) = result {
        assert!(msg.contains("Configuration file not found"));
    } else {
        panic!("Expected Config error");
    }
}

#[test]
fn test_app_config_load_rejects_zero_depth() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("zero_depth.toml");

    fs::write(&config_path, "[validator]\nmax_depth = 0\n").expect("Failed to write TOML");

    let result = AppConfig::load(&config_path);

    if let Err(Error::Config(msg)) = result {
        assert!(msg.contains("max_depth"));
    } else {
        panic!("Expected Config error");
    }
}

#[test]
fn test_app_config_load_partial_file_uses_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("partial.toml");

    fs::write(&config_path, "[validator]\non_missing = \"warn\"\n").expect("Failed to write TOML");

    let config = AppConfig::load(&config_path).expect("Failed to load config");
    assert_eq!(config.validator.on_missing, MissingPropertyPolicy::Warn);
    assert_eq!(config.validator.max_depth, DEFAULT_MAX_DEPTH);
}

#[test]
fn test_app_config_save_and_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nested").join("test_config.toml");

    let original_config = AppConfig {
        validator: ValidatorConfig {
            max_depth: 64,
            on_missing: MissingPropertyPolicy::Warn,
        },
    };

    original_config
        .save(&config_path)
        .expect("Failed to save config");
    let loaded_config = AppConfig::load(&config_path).expect("Failed to load config");

    assert_eq!(loaded_config, original_config);
}

#[test]
fn test_load_or_default_with_explicit_missing_path_fails() {
    let result = AppConfig::load_or_default(Some("definitely_missing_config.toml"));
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_get_config_path() {
    assert_eq!(
        get_config_path(Some("custom.toml")),
        PathBuf::from("custom.toml")
    );
    assert!(get_config_path(None).ends_with(DEFAULT_CONFIG_FILENAME));
}
