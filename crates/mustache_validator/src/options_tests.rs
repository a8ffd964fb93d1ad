use super::*;

#[test]
fn test_validator_options_default() {
    let options = ValidatorOptions::default();
    assert!(!options.has_error_handler());
    assert_eq!(options.depth_limit(), DEFAULT_MAX_DEPTH);
}

#[test]
fn test_validator_options_builder() {
    let options = ValidatorOptions::new()
        .max_depth(8)
        .handle_error(|_segments| {});

    assert!(options.has_error_handler());
    assert_eq!(options.depth_limit(), 8);
}

#[test]
fn test_handle_error_wraps_infallible_handler() {
    let options = ValidatorOptions::new().handle_error(|_segments| {});
    let handler = options.handler().expect("Handler should be installed");

    assert!(handler(&["a".to_string()][..]).is_ok());
}

#[test]
fn test_try_handle_error_propagates_handler_result() {
    let options = ValidatorOptions::new()
        .try_handle_error(|segments| Err(format!("Custom error: {}", segments.join(".")).into()));
    let handler = options.handler().expect("Handler should be installed");

    let result = handler(&["subject".to_string(), "name".to_string()][..]);
    assert_eq!(
        result.expect_err("Handler should fail").to_string(),
        "Custom error: subject.name"
    );
}

#[test]
fn test_debug_hides_handler() {
    let options = ValidatorOptions::new().handle_error(|_segments| {});
    let debug_output = format!("{options:?}");

    assert!(debug_output.contains("has_error_handler: true"));
    assert!(debug_output.contains("max_depth: 512"));
}

#[test]
fn test_validator_config_default() {
    let config = ValidatorConfig::default();
    assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    assert_eq!(config.on_missing, MissingPropertyPolicy::Fail);
}

#[test]
fn test_validator_config_deserialize_partial() {
    let config: ValidatorConfig =
        serde_json::from_str(r#"{"on_missing": "warn"}"#).expect("Failed to parse config");

    assert_eq!(config.on_missing, MissingPropertyPolicy::Warn);
    assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
}

#[test]
fn test_from_config_fail_policy_has_no_handler() {
    let config = ValidatorConfig {
        max_depth: 16,
        on_missing: MissingPropertyPolicy::Fail,
    };
    let options = ValidatorOptions::from_config(&config);

    assert!(!options.has_error_handler());
    assert_eq!(options.depth_limit(), 16);
}

#[test]
fn test_from_config_warn_policy_installs_handler() {
    let config = ValidatorConfig {
        on_missing: MissingPropertyPolicy::Warn,
        ..Default::default()
    };
    let options = ValidatorOptions::from_config(&config);

    assert!(options.has_error_handler());
}
